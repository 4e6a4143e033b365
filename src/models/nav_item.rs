pub struct NavModule {
    pub label: String,
    pub url: String,
    pub icon: String,
    pub is_active: bool,
}

const MODULES: [(&str, &str, &str); 4] = [
    ("Dashboard", "/admin", "dashboard"),
    ("Users", "/admin/users", "group"),
    ("SOS Alerts", "/admin/sos", "warning"),
    ("Check-ins", "/admin/checkins", "place"),
];

/// Header navigation for the current path. The dashboard entry only matches exactly.
pub fn find_navigation(current_path: &str) -> Vec<NavModule> {
    MODULES
        .iter()
        .map(|(label, url, icon)| NavModule {
            label: label.to_string(),
            url: url.to_string(),
            icon: icon.to_string(),
            is_active: if *url == "/admin" {
                current_path == "/admin" || current_path == "/admin/"
            } else {
                current_path == *url || current_path.starts_with(&format!("{url}/"))
            },
        })
        .collect()
}
