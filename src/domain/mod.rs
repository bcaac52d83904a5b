pub mod pizza;

pub use self::pizza::{NewPizza, Pizza};
