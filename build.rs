fn main() {
    // embedded-test ships its own linker fragment; only the test target needs it.
    println!("cargo::rustc-link-arg-tests=-Tembedded-test.x");
}
