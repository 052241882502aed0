use wasm_bindgen::prelude::wasm_bindgen;

use crate::input::parse_grid;
use crate::solver::SearchOptions;

/// Count the duct routes through a floor plan given in the challenge text format, with all pruning enabled.
#[wasm_bindgen(js_name = countPaths)]
pub fn count_paths(input: &str, assume_contiguity: bool) -> Result<u64, js_sys::Error> {
    let mut grid = parse_grid(input, assume_contiguity).map_err(|err| js_sys::Error::new(&err.to_string()))?;
    Ok(grid.count_paths(SearchOptions::default()).paths)
}
