//! End-to-end checks across the camscout crates.

#[cfg(test)]
mod discovery;
#[cfg(test)]
mod net;
#[cfg(test)]
mod relay;
