mod blocking;
mod envelope;
mod trust;
mod utils;
