use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionCount {
    pub region_name: String,
    pub count: u32,
}

/// Resumen del panel de admin
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_companies: u32,
    pub total_regions: u32,
    #[serde(default)]
    pub companies_per_region: Vec<RegionCount>,
}

impl DashboardStats {
    /// Porcentaje entero de empresas que cubren una región
    pub fn share_of(&self, entry: &RegionCount) -> u32 {
        if self.total_companies == 0 {
            return 0;
        }
        (entry.count * 100 + self.total_companies / 2) / self.total_companies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_payload() {
        let json = r#"{"totalCompanies":4,"totalRegions":2,"companiesPerRegion":[{"regionName":"North","count":3}]}"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_companies, 4);
        assert_eq!(stats.companies_per_region[0].region_name, "North");
        assert_eq!(stats.share_of(&stats.companies_per_region[0]), 75);
    }

    #[test]
    fn share_of_empty_directory_is_zero() {
        let stats = DashboardStats { total_companies: 0, total_regions: 1, companies_per_region: vec![] };
        let entry = RegionCount { region_name: "North".into(), count: 0 };
        assert_eq!(stats.share_of(&entry), 0);
    }
}
