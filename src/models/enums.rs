use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(Category {
    Mri => "mri",
    XRay => "xray",
    Ecg => "ecg",
    Blood => "blood",
    Ct => "ct",
    Treatment => "treatment",
});

str_enum!(HealthTrend {
    Excellent => "Excellent",
    Good => "Good",
    Stable => "Stable",
    NeedsAttention => "Needs Attention",
});

str_enum!(Role {
    Doctor => "Doctor",
    Nurse => "Nurse",
    Administrator => "Administrator",
});

/// Static per-category facts. One row per `Category`, in declaration order.
struct CategorySpec {
    category: Category,
    table: &'static str,
    date_field: &'static str,
    title_field: &'static str,
    department_name: &'static str,
    aliases: &'static [&'static str],
}

static CATEGORY_SPECS: [CategorySpec; 6] = [
    CategorySpec {
        category: Category::Mri,
        table: "mri_records",
        date_field: "test_date",
        title_field: "test_name",
        department_name: "MRI",
        aliases: &["mri"],
    },
    CategorySpec {
        category: Category::XRay,
        table: "xray_records",
        date_field: "test_date",
        title_field: "test_name",
        department_name: "X-Ray",
        aliases: &["xray", "x-ray"],
    },
    CategorySpec {
        category: Category::Ecg,
        table: "ecg_records",
        date_field: "test_date",
        title_field: "test_name",
        department_name: "ECG",
        aliases: &["ecg"],
    },
    CategorySpec {
        category: Category::Blood,
        table: "blood_profile_records",
        date_field: "test_date",
        title_field: "test_name",
        department_name: "Blood Profile",
        aliases: &["blood", "blood_profile", "blood-test"],
    },
    CategorySpec {
        category: Category::Ct,
        table: "ct_scan_records",
        date_field: "test_date",
        title_field: "test_name",
        department_name: "CT Scan",
        aliases: &["ct", "ct_scan", "ct-scan"],
    },
    CategorySpec {
        category: Category::Treatment,
        table: "treatment_records",
        date_field: "treatment_date",
        title_field: "treatment_name",
        department_name: "Treatment",
        aliases: &["treatment"],
    },
];

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Mri,
        Category::XRay,
        Category::Ecg,
        Category::Blood,
        Category::Ct,
        Category::Treatment,
    ];

    fn spec(self) -> &'static CategorySpec {
        // CATEGORY_SPECS is indexed in declaration order.
        &CATEGORY_SPECS[self as usize]
    }

    /// SQLite table holding this category's records.
    pub fn table(self) -> &'static str {
        self.spec().table
    }

    /// Name of the date field: `treatment_date` or `test_date`.
    pub fn date_field(self) -> &'static str {
        self.spec().date_field
    }

    /// Name of the title field: `treatment_name` or `test_name`.
    pub fn title_field(self) -> &'static str {
        self.spec().title_field
    }

    /// Human department name used by analytics ("X-Ray", "Blood Profile", ...).
    pub fn department_name(self) -> &'static str {
        self.spec().department_name
    }

    pub fn is_treatment(self) -> bool {
        self == Category::Treatment
    }

    /// Resolve a department path segment (`x-ray`, `blood_profile`, ...), case-insensitive.
    pub fn from_department_alias(name: &str) -> Option<Category> {
        let lower = name.trim().to_lowercase();
        CATEGORY_SPECS
            .iter()
            .find(|spec| spec.aliases.contains(&lower.as_str()))
            .map(|spec| spec.category)
    }
}
