// Standalone test program built on the engine.
// Usage: cargo run --bin testme-demo <scenario>

fn main() {
    testme::cli::run();
}
