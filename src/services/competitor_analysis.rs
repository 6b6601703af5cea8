use serde::Serialize;

/// Half-width, in percentage points, of the band treated as "competitive".
pub const COMPETITIVE_BAND: f64 = 5.0;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompetitorBand {
    AboveAverage,
    BelowAverage,
    Competitive,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct CompetitorComparison {
    pub ideal_price: f64,
    pub competitor_price: f64,
    /// Percent by which the ideal price exceeds the competitor price.
    pub difference: f64,
    pub band: CompetitorBand,
}

impl CompetitorComparison {
    pub fn describe(&self) -> String {
        let abs_difference = self.difference.abs();
        match self.band {
            CompetitorBand::AboveAverage => format!("{abs_difference:.0}% above average"),
            CompetitorBand::BelowAverage => format!("{abs_difference:.0}% below average"),
            CompetitorBand::Competitive => "Competitive price".to_string(),
        }
    }
}

/// Returns `None` when no competitor price was provided.
pub fn compare_with_competitor(
    ideal_price: f64,
    competitor_price: f64,
) -> Option<CompetitorComparison> {
    if competitor_price <= 0.0 {
        return None;
    }

    let difference = (ideal_price / competitor_price - 1.0) * 100.0;
    Some(CompetitorComparison {
        ideal_price,
        competitor_price,
        difference,
        band: classify_difference(difference),
    })
}

pub fn classify_difference(difference: f64) -> CompetitorBand {
    if difference > COMPETITIVE_BAND {
        CompetitorBand::AboveAverage
    } else if difference < -COMPETITIVE_BAND {
        CompetitorBand::BelowAverage
    } else {
        CompetitorBand::Competitive
    }
}
