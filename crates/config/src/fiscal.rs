//! Algerian fiscal rate table
//!
//! VAT rates, progressive IRG brackets, and salary allowances. Built
//! once at startup, validated, then only ever read.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Fiscal rate table (2025 schedule)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiscalConfig {
    /// VAT rate tiers
    #[serde(default)]
    pub vat: VatRates,

    /// IRG brackets, ordered by lower bound
    #[serde(default = "default_brackets")]
    pub brackets: Vec<TaxBracket>,

    /// IRG salary allowances
    #[serde(default)]
    pub allowances: Allowances,
}

/// VAT rate tiers in percent
///
/// The reduced tier is part of the published schedule and available to
/// API callers; text extraction currently has no cue that selects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatRates {
    #[serde(default = "default_vat_normal")]
    pub normal: Decimal,
    #[serde(default = "default_vat_reduced")]
    pub reduced: Decimal,
    #[serde(default = "default_vat_exempt")]
    pub exempt: Decimal,
}

/// One IRG bracket: the slice of taxable income in `(lower, upper]`
/// is taxed at `rate` percent. `upper = None` means unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower: Decimal,
    #[serde(default)]
    pub upper: Option<Decimal>,
    pub rate: Decimal,
}

/// Flat IRG allowances deducted from gross salary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allowances {
    #[serde(default = "default_allowance_base")]
    pub base: Decimal,
    #[serde(default = "default_allowance_per_dependent")]
    pub per_dependent: Decimal,
}

// Default values

fn default_vat_normal() -> Decimal {
    Decimal::new(1900, 2) // 19.00%
}

fn default_vat_reduced() -> Decimal {
    Decimal::new(900, 2) // 9.00%
}

fn default_vat_exempt() -> Decimal {
    Decimal::ZERO
}

fn default_allowance_base() -> Decimal {
    Decimal::from(10_000)
}

fn default_allowance_per_dependent() -> Decimal {
    Decimal::from(2_500)
}

fn default_brackets() -> Vec<TaxBracket> {
    vec![
        TaxBracket {
            lower: Decimal::ZERO,
            upper: Some(Decimal::from(120_000)),
            rate: Decimal::ZERO,
        },
        TaxBracket {
            lower: Decimal::from(120_000),
            upper: Some(Decimal::from(360_000)),
            rate: Decimal::from(23),
        },
        TaxBracket {
            lower: Decimal::from(360_000),
            upper: Some(Decimal::from(1_440_000)),
            rate: Decimal::from(27),
        },
        TaxBracket {
            lower: Decimal::from(1_440_000),
            upper: None,
            rate: Decimal::from(35),
        },
    ]
}

impl Default for VatRates {
    fn default() -> Self {
        Self {
            normal: default_vat_normal(),
            reduced: default_vat_reduced(),
            exempt: default_vat_exempt(),
        }
    }
}

impl Default for Allowances {
    fn default() -> Self {
        Self {
            base: default_allowance_base(),
            per_dependent: default_allowance_per_dependent(),
        }
    }
}

impl Default for FiscalConfig {
    fn default() -> Self {
        Self {
            vat: VatRates::default(),
            brackets: default_brackets(),
            allowances: Allowances::default(),
        }
    }
}

impl FiscalConfig {
    /// Total flat allowance for a salary with `dependents` children
    pub fn allowance_for(&self, dependents: u32) -> Decimal {
        self.allowances.base + Decimal::from(dependents) * self.allowances.per_dependent
    }

    /// Validate the table; call once at startup before use.
    ///
    /// Brackets must start at zero, be strictly ascending and contiguous,
    /// and end with exactly one open-ended bracket, so their union covers
    /// [0, inf) with no overlap. Rates must be percentages.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.brackets.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "brackets".into(),
                message: "bracket table is empty".into(),
            });
        }

        if self.brackets[0].lower != Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "brackets".into(),
                message: "first bracket must start at 0".into(),
            });
        }

        for (i, bracket) in self.brackets.iter().enumerate() {
            let is_last = i + 1 == self.brackets.len();

            match bracket.upper {
                Some(upper) => {
                    if is_last {
                        return Err(ConfigError::InvalidValue {
                            field: "brackets".into(),
                            message: "last bracket must be open-ended".into(),
                        });
                    }
                    if upper <= bracket.lower {
                        return Err(ConfigError::InvalidValue {
                            field: "brackets".into(),
                            message: format!("bracket {i} has upper <= lower"),
                        });
                    }
                    if self.brackets[i + 1].lower != upper {
                        return Err(ConfigError::InvalidValue {
                            field: "brackets".into(),
                            message: format!("gap or overlap after bracket {i}"),
                        });
                    }
                }
                None => {
                    if !is_last {
                        return Err(ConfigError::InvalidValue {
                            field: "brackets".into(),
                            message: format!("bracket {i} is open-ended but not last"),
                        });
                    }
                }
            }

            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE_HUNDRED {
                return Err(ConfigError::InvalidValue {
                    field: "brackets".into(),
                    message: format!("bracket {i} rate out of [0, 100]"),
                });
            }
        }

        for (name, rate) in [
            ("vat.normal", self.vat.normal),
            ("vat.reduced", self.vat.reduced),
            ("vat.exempt", self.vat.exempt),
        ] {
            if rate < Decimal::ZERO || rate > Decimal::ONE_HUNDRED {
                return Err(ConfigError::InvalidValue {
                    field: name.into(),
                    message: "rate out of [0, 100]".into(),
                });
            }
        }

        if self.allowances.base < Decimal::ZERO || self.allowances.per_dependent < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "allowances".into(),
                message: "allowances must be non-negative".into(),
            });
        }

        Ok(())
    }
}
