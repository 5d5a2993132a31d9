//! Chart Variant Module
//! Describes the two upstream output formats and their fixed chart settings.

/// Output format of the fixed-point rsqrt test program, keyed by how many
/// Newton-Raphson refinements it captures per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartVariant {
    /// `x,y0,y1` rows: initial guess plus one refinement.
    OneIteration,
    /// `x,y0,y1,y2` rows: initial guess plus two refinements.
    TwoIterations,
}

impl ChartVariant {
    /// Exact CSV header line that opens the data block.
    pub fn header(self) -> &'static str {
        match self {
            ChartVariant::OneIteration => "x,y0,y1",
            ChartVariant::TwoIterations => "x,y0,y1,y2",
        }
    }

    /// Number of approximation series per data row.
    pub fn series_count(self) -> usize {
        match self {
            ChartVariant::OneIteration => 2,
            ChartVariant::TwoIterations => 3,
        }
    }

    /// Comma-separated fields expected per data row (`x` plus the series).
    pub fn field_count(self) -> usize {
        self.series_count() + 1
    }

    /// Per-series labels for the statistics report.
    pub fn series_labels(self) -> &'static [&'static str] {
        match self {
            ChartVariant::OneIteration => &["Initial Guess (y0)", "1st Iteration (y1)"],
            ChartVariant::TwoIterations => &[
                "Initial Guess (y0)",
                "1st Iteration (y1)",
                "2nd Iteration (y2)",
            ],
        }
    }

    /// Per-series labels for the chart legend.
    pub fn legend_labels(self) -> &'static [&'static str] {
        match self {
            ChartVariant::OneIteration => {
                &["Error - Initial Guess (y0)", "Error - 1 Iteration (y1)"]
            }
            ChartVariant::TwoIterations => &[
                "Error - Initial Guess (y0)",
                "Error - 1 Iteration (y1)",
                "Error - 2 Iterations (y2)",
            ],
        }
    }

    /// Chart title.
    pub fn title(self) -> &'static str {
        match self {
            ChartVariant::OneIteration => "fast_rsqrt() Precision Analysis (1 Iteration)",
            ChartVariant::TwoIterations => "fast_rsqrt() Precision Analysis (x=1 to 100)",
        }
    }

    /// Name of the PNG artifact written for this variant.
    pub fn output_file(self) -> &'static str {
        match self {
            ChartVariant::OneIteration => "precision_iter1.png",
            ChartVariant::TwoIterations => "precision_iter2.png",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_field_count_matches_series() {
        for variant in [ChartVariant::OneIteration, ChartVariant::TwoIterations] {
            let header_fields = variant.header().split(',').count();
            assert_eq!(header_fields, variant.field_count());
            assert_eq!(variant.field_count(), variant.series_count() + 1);
        }
    }

    #[test]
    fn labels_cover_every_series() {
        for variant in [ChartVariant::OneIteration, ChartVariant::TwoIterations] {
            assert_eq!(variant.series_labels().len(), variant.series_count());
            assert_eq!(variant.legend_labels().len(), variant.series_count());
        }
    }

    #[test]
    fn variants_have_distinct_artifacts() {
        assert_ne!(
            ChartVariant::OneIteration.output_file(),
            ChartVariant::TwoIterations.output_file()
        );
        assert_ne!(
            ChartVariant::OneIteration.header(),
            ChartVariant::TwoIterations.header()
        );
    }
}
