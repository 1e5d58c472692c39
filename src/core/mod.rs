pub mod console;
pub mod driver;
pub mod reader;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;
