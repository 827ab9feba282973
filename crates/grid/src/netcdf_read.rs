//! Low-level NetCDF extraction helpers.

use std::path::Path;

use netcdf::AttributeValue;

use crate::error::GridError;

/// Variable names that are coordinates or bounds, never the data variable.
const COORDINATE_NAMES: &[&str] = &[
    "latitude",
    "longitude",
    "lat",
    "lon",
    "time",
    "latitude_bnds",
    "longitude_bnds",
    "time_bnds",
];

/// Open a NetCDF file at `path`, returning [`GridError::FileNotFound`] if the
/// path does not exist on disk.
pub(crate) fn open_file(path: &Path) -> Result<netcdf::File, GridError> {
    if !path.exists() {
        return Err(GridError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(netcdf::open(path)?)
}

/// Read a 1-D `f64` coordinate variable, trying each alias in order.
///
/// Returns the data from the first alias that matches. If none match,
/// returns [`GridError::MissingCoordinate`] with the first alias as the name.
pub(crate) fn read_coordinate(
    file: &netcdf::File,
    aliases: &[&str],
    path: &Path,
) -> Result<Vec<f64>, GridError> {
    for &alias in aliases {
        if let Some(var) = file.variable(alias) {
            return Ok(var.get_values::<f64, _>(..)?);
        }
    }

    let name = aliases.first().copied().unwrap_or("unknown");
    Err(GridError::MissingCoordinate {
        name: name.to_string(),
        path: path.to_path_buf(),
    })
}

/// Locate the primary data variable: the first 3-D variable whose name is
/// not a coordinate or bounds name.
pub(crate) fn find_data_variable_name(
    file: &netcdf::File,
    path: &Path,
) -> Result<String, GridError> {
    for var in file.variables() {
        let name = var.name();
        if COORDINATE_NAMES.contains(&name.as_str()) {
            continue;
        }
        if var.dimensions().len() == 3 {
            return Ok(name);
        }
    }
    Err(GridError::NoDataVariable {
        path: path.to_path_buf(),
    })
}

/// Read a 3-D `f64` variable and return the flattened data together with
/// the shape `[nt, ny, nx]` derived from the variable's dimensions.
pub(crate) fn read_3d_f64(
    file: &netcdf::File,
    var_name: &str,
    path: &Path,
) -> Result<(Vec<f64>, [usize; 3]), GridError> {
    let var = file
        .variable(var_name)
        .ok_or_else(|| GridError::NoDataVariable {
            path: path.to_path_buf(),
        })?;

    let dims = var.dimensions();
    if dims.len() != 3 {
        return Err(GridError::ShapeMismatch {
            reason: format!(
                "variable '{var_name}' has {} dimensions, expected 3",
                dims.len()
            ),
        });
    }

    let shape = [dims[0].len(), dims[1].len(), dims[2].len()];
    let data = var.get_values::<f64, _>(..)?;
    Ok((data, shape))
}

/// Read the `_FillValue` attribute of a variable, if present.
pub(crate) fn read_fill_value(file: &netcdf::File, var_name: &str) -> Option<f64> {
    let var = file.variable(var_name)?;
    match var.attribute_value("_FillValue").and_then(|res| res.ok())? {
        AttributeValue::Double(v) => Some(v),
        AttributeValue::Float(v) => Some(f64::from(v)),
        _ => None,
    }
}
