//! End-to-end tests of the PurFacted SDK against a mocked API server.

#[cfg(test)]
mod tests;
