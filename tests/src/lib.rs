//! End-to-end scans of loopback ports opened by in-process listeners.

#[cfg(test)]
mod scan;
