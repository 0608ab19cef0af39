//! Build script for cookie-filter
//!
//! Embeds build-time information (git commit, dirty status, build timestamp)
//! shown by `cookie-filter --version`.

fn main() {
    shadow_rs::ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build info");
}
