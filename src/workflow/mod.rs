pub mod changed_files;
pub mod report;
#[cfg(test)]
pub mod testing;
