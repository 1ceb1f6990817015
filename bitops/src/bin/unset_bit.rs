use bitops::clear_bit;

fn main() {
    let num: u8 = 129;
    let pos = 7;
    println!("{}", clear_bit(num, pos));
}
