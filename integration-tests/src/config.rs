use std::path::PathBuf;

use realestate_cleaning::cleaning::Dataset;
use realestate_cleaning::config::ReferenceSets;
use realestate_cleaning::ingest::read_dataset_from_path;

fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("fixtures");
    path.push(name);
    path
}

pub fn load_reference_sets() -> Result<ReferenceSets, String> {
    ReferenceSets::load(&fixture("reference_sets.json")).map_err(|e| e.to_string())
}

pub fn load_noisy_sample() -> Result<Dataset, String> {
    read_dataset_from_path(&fixture("sales_data_noisy_sample.csv"), Some("ID"))
        .map_err(|e| e.to_string())
}
