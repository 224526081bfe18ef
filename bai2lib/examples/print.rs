use bai2lib::{
    parse::Bai2,
    traits::{ReadFormat, WriteFormat},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: читаем BAI2 со stdin и печатаем канонический вид в stdout
    let file = Bai2::read(std::io::BufReader::new(std::io::stdin()))?;
    Bai2::write(std::io::stdout(), &file)?;
    Ok(())
}
