// WASM bindings for Romanian-to-Russian transliteration.
//
// Exports free functions via wasm-bindgen. The rule trace is serialized to
// plain JavaScript objects using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   transliterateToRussian("Bună ziua");  // => "бунэ зьюа"
//   transliterateWord("ceai");            // => "чаи"
//   explain("ceai");                      // => [{ input: "ceai", steps: [...], output: "чаи" }]

use wasm_bindgen::prelude::*;

/// Transliterate Romanian text into Russian Cyrillic.
#[wasm_bindgen(js_name = transliterateToRussian)]
pub fn transliterate_to_russian(text: &str) -> String {
    translit_ro::transliterate_to_russian(text)
}

/// Transliterate a single word, without splitting or trimming.
#[wasm_bindgen(js_name = transliterateWord)]
pub fn transliterate_word(word: &str) -> String {
    translit_ro::transliterate_word(word)
}

/// Per-word rule trace as an array of `{ input, steps, output }` objects.
#[wasm_bindgen]
pub fn explain(text: &str) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(&translit_ro::explain(text))
        .map_err(|e| JsError::new(&e.to_string()))
}
