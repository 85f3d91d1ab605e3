//! Schema command implementation

use crate::cli::context::{load_config, resolve_format};
use crate::cli::GlobalOptions;
use crate::error::Result;
use crate::output::{Formattable, SchemaView};
use crate::provider::{Resource, SensitiveDataScannerGroupResource};

/// Print the group resource schema
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let format = resolve_format(opts, &load_config(opts)?);
    let resource = SensitiveDataScannerGroupResource::new();

    SchemaView {
        resource_type: resource.type_name().to_string(),
        schema: resource.schema(),
    }
    .print(format)
}
