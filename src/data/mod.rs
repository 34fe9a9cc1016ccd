//! Static demo fixtures.
//!
//! Both fixture files are embedded at build time and parsed once on first
//! access. A parse failure means the bundled JSON is broken, which is
//! reported as a [`DataError`] rather than a panic so the CLI can print it.

mod error;
mod functions;
mod pypi;

use std::sync::OnceLock;

pub use error::DataError;
pub use functions::{DemoFunction, MinerSubmission, RawFunction};
pub use pypi::{FunctionMetadata, PyPIDataset, PyPIFunction, PyPIStats, PyPITask, TerminalOutput};

const DEMO_FUNCTIONS_JSON: &str = include_str!("../../assets/demo_functions.json");
const PYPI_DATASET_JSON: &str = include_str!("../../assets/pypi_dataset.json");

static DEMO_FUNCTIONS: OnceLock<Result<Vec<DemoFunction>, String>> = OnceLock::new();
static PYPI_DATASET: OnceLock<Result<PyPIDataset, String>> = OnceLock::new();

/// The curated functions used by the walkthrough.
pub fn demo_functions() -> Result<&'static [DemoFunction], DataError> {
    DEMO_FUNCTIONS
        .get_or_init(|| functions::parse(DEMO_FUNCTIONS_JSON).map_err(|e| e.to_string()))
        .as_ref()
        .map(Vec::as_slice)
        .map_err(|message| DataError::Malformed {
            fixture: "demo_functions.json",
            message: message.clone(),
        })
}

/// Look up one demo function by index.
pub fn demo_function(index: usize) -> Result<&'static DemoFunction, DataError> {
    let functions = demo_functions()?;
    functions.get(index).ok_or(DataError::NoSuchFunction {
        index,
        available: functions.len(),
    })
}

/// The pre-generated PyPI scan used on the landing page.
pub fn pypi_dataset() -> Result<&'static PyPIDataset, DataError> {
    PYPI_DATASET
        .get_or_init(|| pypi::parse(PYPI_DATASET_JSON).map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|message| DataError::Malformed {
            fixture: "pypi_dataset.json",
            message: message.clone(),
        })
}
