//! Reference data for dropdown-style selections
//!
//! The fixed lists the forms are populated from: project names (the category
//! set), the month range open for entry, vendor and service lists, and staff
//! designations. These are immutable inputs supplied at startup, loaded from
//! a YAML file when present and otherwise falling back to the compiled-in
//! defaults.

use serde::{Deserialize, Serialize};

use super::paths::CostsplitPaths;
use crate::error::{CostsplitError, CostsplitResult};
use crate::models::{CategorySet, Period};

/// Reference lists for form population and category configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Project/cost-center names; this is the category set, in fixed order
    #[serde(default = "default_projects")]
    pub projects: Vec<String>,

    /// Months open for selection
    #[serde(default = "default_months")]
    pub months: Vec<String>,

    /// Core team employee names
    #[serde(default = "default_core_team_names")]
    pub core_team_names: Vec<String>,

    /// Core team designations
    #[serde(default = "default_designations")]
    pub designations: Vec<String>,

    /// CSR admin expense vendors
    #[serde(default = "default_csr_vendors")]
    pub csr_vendors: Vec<String>,

    /// CSR admin expense types
    #[serde(default = "default_csr_expense_types")]
    pub csr_expense_types: Vec<String>,

    /// Payment frequency options (shared by the CSR and HR forms)
    #[serde(default = "default_payment_frequencies")]
    pub payment_frequencies: Vec<String>,

    /// HR expense vendors
    #[serde(default = "default_hr_vendors")]
    pub hr_vendors: Vec<String>,

    /// HR expense services
    #[serde(default = "default_hr_services")]
    pub hr_services: Vec<String>,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            projects: default_projects(),
            months: default_months(),
            core_team_names: default_core_team_names(),
            designations: default_designations(),
            csr_vendors: default_csr_vendors(),
            csr_expense_types: default_csr_expense_types(),
            payment_frequencies: default_payment_frequencies(),
            hr_vendors: default_hr_vendors(),
            hr_services: default_hr_services(),
        }
    }
}

impl ReferenceData {
    /// Load reference data from disk, or fall back to the compiled-in defaults
    pub fn load_or_default(paths: &CostsplitPaths) -> Result<Self, CostsplitError> {
        let reference_path = paths.reference_file();

        if reference_path.exists() {
            let contents = std::fs::read_to_string(&reference_path).map_err(|e| {
                CostsplitError::Io(format!("Failed to read reference file: {}", e))
            })?;

            serde_yaml::from_str(&contents).map_err(|e| {
                CostsplitError::Config(format!("Failed to parse reference file: {}", e))
            })
        } else {
            Ok(Self::default())
        }
    }

    /// Save reference data to disk
    pub fn save(&self, paths: &CostsplitPaths) -> Result<(), CostsplitError> {
        paths.ensure_directories()?;

        let contents = serde_yaml::to_string(self).map_err(|e| {
            CostsplitError::Config(format!("Failed to serialize reference data: {}", e))
        })?;

        std::fs::write(paths.reference_file(), contents)
            .map_err(|e| CostsplitError::Io(format!("Failed to write reference file: {}", e)))?;

        Ok(())
    }

    /// The configured category set
    pub fn category_set(&self) -> CostsplitResult<CategorySet> {
        CategorySet::new(self.projects.iter().cloned())
    }

    /// Check a CSR form selection against the configured lists
    ///
    /// The CSR sheet is dropdown-only, so free-form values are rejected here.
    /// HR entries stay free-form; that vendor list carries a manual-entry
    /// escape in the sheets.
    pub fn validate_csr_selection(
        &self,
        period: &Period,
        vendor: &str,
        expense_type: &str,
        payment_frequency: &str,
    ) -> CostsplitResult<()> {
        require_listed("Month", &period.to_string(), &self.months)?;
        require_listed("Vendor", vendor, &self.csr_vendors)?;
        require_listed("Expense type", expense_type, &self.csr_expense_types)?;
        require_listed(
            "Payment frequency",
            payment_frequency,
            &self.payment_frequencies,
        )?;
        Ok(())
    }
}

fn require_listed(field: &str, value: &str, options: &[String]) -> CostsplitResult<()> {
    let value = value.trim();
    if options.iter().any(|option| option == value) {
        Ok(())
    } else {
        Err(CostsplitError::Validation(format!(
            "{} '{}' is not one of the configured options",
            field, value
        )))
    }
}

fn default_projects() -> Vec<String> {
    to_strings(&[
        "HLL Malappuram",
        "Power Grid Corporation of India Limited - Yelahanka, Bangalore",
        "Cochin Shipyard Limited - Andaman",
        "IOCL - Panipat",
        "HLL Cotton Hill, Trivandrum",
        "Swasthya-An innovative behaviour change programme for Aneamia in women of reproductive age",
        "Counselling support for transgender individuals-pre and post surgery and non surgical pathways in gender transition",
        "Inclusive community mental health initiative in Wayanad district",
        "My City",
        "Exploring the correlation and Diagnostic potential of Menstrual Blood",
        "HLL Maharashtra",
    ])
}

fn default_months() -> Vec<String> {
    to_strings(&[
        "June 2025",
        "July 2025",
        "August 2025",
        "September 2025",
        "October 2025",
        "November 2025",
        "December 2025",
        "January 2026",
        "February 2026",
        "March 2026",
    ])
}

fn default_core_team_names() -> Vec<String> {
    to_strings(&[
        "Gayatri Vijay L",
        "Vishnu",
        "Anakha Joy",
        "Jeena Raju",
        "Sujitha S",
        "Sudheesh",
        "Sukumaran",
        "Soumya S K",
        "Vignesh Kumar P B",
        "Ashitha Vins V M",
        "Savitha Y",
        "Silpa",
        "Preethima",
        "Sakshi Baliram Savare",
        "Rakhee",
        "Jayalekshmi J",
        "Sushila",
        "Syamili",
        "Saidali Safar",
        "Titu S Jayan",
        "Dhanya B L",
        "Heksy Sebastian",
        "Manjusha V",
        "Mariyathul Hibthiya",
        "Ruksana Beegum Pakkichippura",
        "Greeshma Kuriakose",
        "Ashwini Bhausaheb Ranjane",
        "Swathy Krishna S",
        "Anjali Prakash K",
        "Ajila Mohan N J",
        "Elizabeth Packim",
        "Arathy A S Kumar",
        "Juhaina C K",
        "Navya M",
        "Alka Wadhwa",
        "Anjaly V",
        "Anjali A S",
        "Rakhi Mohan",
        "Abhirami N A",
        "Sarika P S Krishna",
        "Bhavya R J",
        "Jesna C",
        "Rasna K S",
        "Lenita G Lawrence",
        "Devika Prasad",
        "Jayalekshmi M J",
        "K Anakha Soman",
        "Jithin Dominic",
        "Divya Vinod",
        "Sherin Jacob",
        "Arjuna V Nath",
        "Rejitha Ravi",
        "Devika HS",
        "Jijo Pramod",
    ])
}

fn default_designations() -> Vec<String> {
    to_strings(&[
        "Project Associate",
        "Project Associate (Public Health)",
        "Project Associate (Community Development)",
        "Field Assistant",
        "Accounts Assistant",
        "Administrative Assistant (Projects)",
        "Project Facilitator",
        "Office Assistant",
        "Backend Support",
    ])
}

fn default_csr_vendors() -> Vec<String> {
    to_strings(&[
        "Manjith Travels",
        "Alchemy IBS",
        "Oval Blue Technologies",
        "Volks Electronics",
        "Asianet",
        "Stationary SERVICES",
    ])
}

fn default_csr_expense_types() -> Vec<String> {
    to_strings(&[
        "Contract Vehicle",
        "Website",
        "Photocopier SDP",
        "Desktop rental",
        "Internet Services",
        "Stationary",
    ])
}

fn default_payment_frequencies() -> Vec<String> {
    to_strings(&["Monthly", "Quarterly", "Half Yearly"])
}

fn default_hr_vendors() -> Vec<String> {
    to_strings(&[
        "Dr Anandam",
        "BSNL",
        "KSEB",
        "KWA",
        "Subramania Industries",
        "Imprest",
        "Geejey Solutions",
        "VRS infosystems",
        "M/sArmtech Computer Services",
        "Nu aire",
        "Miscellaneous",
        "Microsoft 365",
        "Asterisk",
        "Indian Postal Department",
        "Pradeep Kumar Cost Accountant",
        "Vismaya Services",
        "Naveen Security Services",
    ])
}

fn default_hr_services() -> Vec<String> {
    to_strings(&[
        "House Rent",
        "Land Line",
        "Electricity Bill",
        "Water Bill",
        "DG AMC",
        "Monthly Imprest",
        "Epabx AMC",
        "Tally Software Renewal",
        "CAMC computer hardware",
        "AC AMC",
        "Repair & Maintenance",
        "Software",
        "Photocopier (Admin & DVP)",
        "Speed post",
        "Financial Consultant",
        "Accounts Assistance",
        "HK salary",
        "My city salary",
        "Security salary",
    ])
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_csr_selection() {
        let reference = ReferenceData::default();
        let june = Period::month(2025, 6);

        assert!(reference
            .validate_csr_selection(&june, "Asianet", "Internet Services", "Monthly")
            .is_ok());

        // Free-form values are rejected field by field
        assert!(reference
            .validate_csr_selection(&june, "Some Vendor", "Internet Services", "Monthly")
            .unwrap_err()
            .is_validation());
        assert!(reference
            .validate_csr_selection(&june, "Asianet", "Snacks", "Monthly")
            .is_err());
        assert!(reference
            .validate_csr_selection(&june, "Asianet", "Internet Services", "Daily")
            .is_err());

        // Months outside the configured range are closed for entry
        assert!(reference
            .validate_csr_selection(&Period::month(2024, 1), "Asianet", "Internet Services", "Monthly")
            .is_err());
    }

    #[test]
    fn test_default_category_set() {
        let reference = ReferenceData::default();
        let categories = reference.category_set().unwrap();
        assert_eq!(categories.len(), 11);
        assert!(categories.contains("My City"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CostsplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        let reference = ReferenceData::load_or_default(&paths).unwrap();
        assert_eq!(reference, ReferenceData::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CostsplitPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut reference = ReferenceData::default();
        reference.projects = vec!["Alpha".to_string(), "Beta".to_string()];
        reference.save(&paths).unwrap();

        let loaded = ReferenceData::load_or_default(&paths).unwrap();
        assert_eq!(loaded.projects, vec!["Alpha", "Beta"]);
        // Untouched lists keep their defaults
        assert_eq!(loaded.payment_frequencies, default_payment_frequencies());
    }

    #[test]
    fn test_partial_yaml_falls_back_per_field() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CostsplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.reference_file(), "projects:\n  - Alpha\n").unwrap();

        let loaded = ReferenceData::load_or_default(&paths).unwrap();
        assert_eq!(loaded.projects, vec!["Alpha"]);
        assert_eq!(loaded.months, default_months());
    }
}
