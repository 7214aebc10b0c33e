fn main() { println!("the the the the the the"); }
