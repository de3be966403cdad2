/// Get the version string for pretty and libpretty
pub fn get_version_string() -> String {
    format!(
        "pretty {}\nlibpretty {}",
        env!("CARGO_PKG_VERSION"),
        libpretty::version()
    )
}

/// Print version information to stdout
pub fn print_version() {
    println!("{}", get_version_string());
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
