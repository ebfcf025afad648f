use super::error::DataError;

// ---------------------------------------------------------------------------
// EnergyTable – the parsed three-column file
// ---------------------------------------------------------------------------

/// Samples of a particle crossing a target, one per data row.
///
/// All three columns always have the same length; the only way to build one
/// is through [`EnergyTable::from_rows`], which enforces it.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyTable {
    distance: Vec<f64>,
    energy1: Vec<f64>,
    energy2: Vec<f64>,
}

impl EnergyTable {
    /// Unpack `(distance, energy1, energy2)` rows into columns.
    pub fn from_rows<I>(rows: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = [f64; 3]>,
    {
        let rows = rows.into_iter();
        let (lower, _) = rows.size_hint();
        let mut table = EnergyTable {
            distance: Vec::with_capacity(lower),
            energy1: Vec::with_capacity(lower),
            energy2: Vec::with_capacity(lower),
        };
        for [d, e1, e2] in rows {
            table.distance.push(d);
            table.energy1.push(e1);
            table.energy2.push(e2);
        }
        if table.is_empty() {
            return Err(DataError::Empty);
        }
        Ok(table)
    }

    pub fn distance(&self) -> &[f64] {
        &self.distance
    }

    pub fn energy1(&self) -> &[f64] {
        &self.energy1
    }

    pub fn energy2(&self) -> &[f64] {
        &self.energy2
    }

    /// Number of samples (rows).
    pub fn len(&self) -> usize {
        self.distance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distance.is_empty()
    }

    /// Divide each energy column by its own maximum.
    pub fn normalized(&self) -> Result<NormalizedEnergies, DataError> {
        Ok(NormalizedEnergies {
            energy1: normalize_by_max(&self.energy1, "energy1")?,
            energy2: normalize_by_max(&self.energy2, "energy2")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Both energy columns scaled so that each one peaks at 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEnergies {
    pub energy1: Vec<f64>,
    pub energy2: Vec<f64>,
}

/// Largest value of a series, `None` when empty.
pub fn series_max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Divide every element by the series maximum.
///
/// Fails with [`DataError::NonPositiveMaximum`] when the maximum is not a
/// positive finite number; the result would no longer peak at 1.0.
pub fn normalize_by_max(values: &[f64], column: &'static str) -> Result<Vec<f64>, DataError> {
    let max = series_max(values).ok_or(DataError::Empty)?;
    if !max.is_finite() || max <= 0.0 {
        return Err(DataError::NonPositiveMaximum { column, max });
    }
    log::debug!("{column}: max = {max}");
    Ok(values.iter().map(|&v| v / max).collect())
}
