pub const ABC_CENSUS_DISPLAY_VERSION: &str = env!("ABC_CENSUS_DISPLAY_VERSION");
pub const ABC_CENSUS_BUILD_N: &str = env!("ABC_CENSUS_BUILD_N");

pub fn version_cli_text() -> String {
    format!(
        "abc-census {}\nBuild {}\nCounts ABC/abc permutations over 3-letter windows of an ABCabc sequence",
        ABC_CENSUS_DISPLAY_VERSION, ABC_CENSUS_BUILD_N
    )
}
