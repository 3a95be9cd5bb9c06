use std::io::Read;
use minjson_core::parse;

fn main() {
    let mut input = Vec::new();
    std::io::stdin().read_to_end(&mut input).unwrap();

    match parse(&input) {
        Ok(value) => println!("{:?}", value),
        Err(err) => {
            eprintln!("parse error: {}", err.message());
            std::process::exit(1);
        }
    }
}
