use billhash_core::error::BillhashError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), BillhashError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
