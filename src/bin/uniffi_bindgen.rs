//! UniFFI bindgen CLI for generating Swift and Kotlin bindings from the recipe-hub library.
//!
//! ```bash
//! cargo run --features uniffi-cli --bin uniffi-bindgen generate --library target/release/librecipe_hub.so --language kotlin --out-dir ./bindings
//! ```

fn main() {
    uniffi::uniffi_bindgen_main()
}
