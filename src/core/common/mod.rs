pub mod error;
pub use error::OxirowError;
pub mod hash_code;
pub mod types;

#[cfg(test)]
mod tests {
    mod error_tests;
}
