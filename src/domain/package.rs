use serde::Serialize;

/// Monthly plans sold by weekly frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageTier {
    OncePerWeek,
    TwicePerWeek,
    ThricePerWeek,
}

impl PackageTier {
    pub const ALL: [PackageTier; 3] = [
        PackageTier::OncePerWeek,
        PackageTier::TwicePerWeek,
        PackageTier::ThricePerWeek,
    ];

    /// Calibrated sessions per month. Not 4.33 x frequency on purpose.
    pub fn sessions_per_month(self) -> f64 {
        match self {
            PackageTier::OncePerWeek => 5.0,
            PackageTier::TwicePerWeek => 9.0,
            PackageTier::ThricePerWeek => 13.0,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            PackageTier::OncePerWeek => "1x",
            PackageTier::TwicePerWeek => "2x",
            PackageTier::ThricePerWeek => "3x",
        }
    }

    pub fn frequency_label(self) -> &'static str {
        match self {
            PackageTier::OncePerWeek => "1x per week",
            PackageTier::TwicePerWeek => "2x per week",
            PackageTier::ThricePerWeek => "3x per week",
        }
    }

    pub fn sessions_label(self) -> String {
        format!("~{} sessions/month", self.sessions_per_month())
    }
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Packages {
    #[serde(rename = "1x")]
    pub one_x: f64,
    #[serde(rename = "2x")]
    pub two_x: f64,
    #[serde(rename = "3x")]
    pub three_x: f64,
}

impl Packages {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn from_price_per_session(price_per_session: f64) -> Self {
        let mut packages = Self::zero();
        for tier in PackageTier::ALL {
            packages.set(tier, price_per_session * tier.sessions_per_month());
        }
        packages
    }

    pub fn get(&self, tier: PackageTier) -> f64 {
        match tier {
            PackageTier::OncePerWeek => self.one_x,
            PackageTier::TwicePerWeek => self.two_x,
            PackageTier::ThricePerWeek => self.three_x,
        }
    }

    pub fn set(&mut self, tier: PackageTier, price: f64) {
        match tier {
            PackageTier::OncePerWeek => self.one_x = price,
            PackageTier::TwicePerWeek => self.two_x = price,
            PackageTier::ThricePerWeek => self.three_x = price,
        }
    }
}
