//! Shell configuration
//!
//! Page copy, bibliography and navigation links are static data owned by the
//! shell. The defaults reproduce the published page; a TOML file can override
//! any field:
//!
//! ```toml
//! title = "Specialism Wayback Machine"
//! data_path = "/srv/wayback/content.json"
//!
//! [[links]]
//! label = "Home"
//! url = "https://example.com/"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wayback_content::DEFAULT_STORE_PATH;

/// One bibliography entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Publisher, date and claim
    pub title: String,
    /// Link to the cited page
    pub url: String,
}

/// One navigation link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Button text
    pub label: String,
    /// Link target
    pub url: String,
}

/// Static data the renderers draw from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Page title
    pub title: String,
    /// Hero headline under the title
    pub headline: String,
    /// One-line introduction under the headline
    pub tagline: String,
    /// Store location; `--data` and `WAYBACK_DATA` take precedence
    pub data_path: Option<PathBuf>,
    /// Bibliography, kept sorted by title
    pub sources: Vec<Source>,
    /// Navigation links, in display order
    pub links: Vec<NavLink>,
}

/// Errors loading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`ShellConfig`]
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ShellConfig {
    /// Load a TOML config file; absent fields keep their defaults.
    ///
    /// # Errors
    /// `ConfigError::Read` or `ConfigError::Parse`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.sort_sources();
        tracing::debug!(path = %path.display(), "loaded shell config");
        Ok(config)
    }

    /// Store path after applying precedence: `cli` (flag or environment),
    /// then the config file, then the built-in default.
    #[must_use]
    pub fn resolve_data_path(&self, cli: Option<&Path>) -> PathBuf {
        cli.or(self.data_path.as_deref())
            .map_or_else(|| PathBuf::from(DEFAULT_STORE_PATH), Path::to_path_buf)
    }

    fn sort_sources(&mut self) {
        self.sources
            .sort_by_cached_key(|source| source.title.to_lowercase());
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        let mut config = Self {
            title: "The Hamilton Barnes Specialism Wayback Machine".to_string(),
            headline: "We heard that 2026 is the new 2016".to_string(),
            tagline: "Here is how our tech specialisms fared over the past decade and what it \
                      means for the people building them."
                .to_string(),
            data_path: None,
            sources: BIBLIOGRAPHY
                .iter()
                .map(|(title, url)| Source {
                    title: (*title).to_string(),
                    url: (*url).to_string(),
                })
                .collect(),
            links: NAVIGATION
                .iter()
                .map(|(label, url)| NavLink {
                    label: (*label).to_string(),
                    url: (*url).to_string(),
                })
                .collect(),
        };
        config.sort_sources();
        config
    }
}

const NAVIGATION: &[(&str, &str)] = &[
    ("Home", "https://www.hamilton-barnes.com/"),
    ("Explore Roles", "https://www.hamilton-barnes.com/jobs"),
    ("Candidates", "https://www.hamilton-barnes.com/candidates"),
    ("Clients", "https://www.hamilton-barnes.com/clients"),
    ("Graduates", "https://www.empowering-future-network-engineers.com/"),
];

const BIBLIOGRAPHY: &[(&str, &str)] = &[
    ("Amazon - Project Kuiper FCC approval; commit to invest >$10B", "https://www.aboutamazon.com/news/company-news/amazon-receives-fcc-approval-for-project-kuiper-satellite-constellation"),
    ("Brookings (27 Sep 2019) - NotPetya caused an estimated $10B of damage worldwide", "https://www.brookings.edu/articles/a-federal-backstop-for-insuring-against-cyberattacks/"),
    ("Brookings - NotPetya did ~$10B of damage globally (Dec 2021)", "https://www.brookings.edu/articles/how-the-notpetya-attack-is-reshaping-cyber-insurance/"),
    ("Business Wire (19 Oct 2022) - Gartner forecasts worldwide IT spending to grow 5.1% in 2023", "https://www.businesswire.com/news/home/20221019005682/en/Gartner-Forecasts-Worldwide-IT-Spending-to-Grow-5.1-in-2023"),
    ("Business Wire (7 Apr 2021) - Gartner forecasts worldwide IT spending to reach $4.1T in 2021", "https://www.businesswire.com/news/home/20210407005595/en/Gartner-Forecasts-Worldwide-IT-Spending-to-Reach-%244-Trillion-in-2021"),
    ("Canalys (8 Feb 2023) - Cloud infrastructure services spend growth (PDF)", "https://canalys-prod-public.s3.eu-west-1.amazonaws.com/static/press_release/2023/1725098181Worldwide-Cloud-Market-Q4-2022.pdf"),
    ("CBRE (24 Jun 2024) - Global Data Center Trends 2024", "https://www.cbre.com/insights/reports/global-data-center-trends-2024"),
    ("CISA - Colonial Pipeline attack summary (May 2021)", "https://www.cisa.gov/news-events/news/attack-colonial-pipeline-what-weve-learned-what-weve-done-over-past-two-years"),
    ("CISA - Meltdown and Spectre guidance (Jan 2018)", "https://www.cisa.gov/news-events/alerts/2018/01/04/meltdown-and-spectre-side-channel-vulnerability-guidance"),
    ("CISA alert (14 Dec 2020) - Active exploitation of SolarWinds Orion software", "https://www.cisa.gov/news-events/alerts/2020/12/13/active-exploitation-solarwinds-software"),
    ("Cloudflare - Mirai botnet retrospective (Dec 2017)", "https://blog.cloudflare.com/inside-mirai-the-infamous-iot-botnet-a-retrospective-analysis/"),
    ("Cloudflare Learning Center - Mirai botnet background", "https://www.cloudflare.com/learning/ddos/glossary/mirai-botnet/"),
    ("Data Center Dynamics (20 Nov 2025) - Hyperscale capex and capacity hits peak in Q3 2025", "https://www.datacenterdynamics.com/en/news/hyperscale-capex-and-capacity-hits-peak-in-q3-2025-synergy/"),
    ("EU NIS2 Directive (EU) 2022/2555 - EUR-Lex", "https://eur-lex.europa.eu/eli/dir/2022/2555/oj/eng"),
    ("European Commission - AI Act enters into force (Aug 1, 2024)", "https://commission.europa.eu/news-and-media/news/ai-act-enters-force-2024-08-01_en"),
    ("European Commission Digital Strategy - AI Act timeline and applicability", "https://digital-strategy.ec.europa.eu/en/policies/regulatory-framework-ai"),
    ("FCC - 600 MHz incentive auction yielded $19.8B", "https://www.fcc.gov/600-mhz-band"),
    ("FCC - C-band Auction 107 results (gross bids >$81B)", "https://www.fcc.gov/document/fcc-announces-winning-bidders-c-band-auction"),
    ("FTTH Council Europe (24 May 2022) - European FTTH/B Market Panorama 2022", "https://www.ftthcouncil.eu/committees/market-intelligence/1436/european-ftth-b-market-panorama-2022"),
    ("Gartner (15 Jan 2020) - Worldwide IT spending projected at $3.9T in 2020", "https://www.gartner.com/en/newsroom/press-releases/2020-01-15-gartner-says-global-it-spending-to-reach-3point9-trillion-in-2020"),
    ("Gartner (15 Jan 2026) - Worldwide AI spending forecast $2.52T in 2026", "https://www.gartner.com/en/newsroom/press-releases/2026-1-15-gartner-says-worldwide-ai-spending-will-total-2-point-5-trillion-dollars-in-2026"),
    ("Gartner (16 Jul 2024) - Worldwide IT spending expected at $5.26T in 2024", "https://www.gartner.com/en/newsroom/press-releases/2024-07-16-gartner-forecasts-worldwide-it-spending-to-grow-7-point-5-percent-in-2024"),
    ("Gartner (17 Apr 2019) - Worldwide IT spending projected at $3.79T in 2019", "https://www.gartner.com/en/newsroom/press-releases/2019-04-17-gartner-says-global-it-spending-to-grow-1-1-percent-i"),
    ("Gartner (20 Oct 2021) - Worldwide IT spending projected at $4.5T in 2022", "https://www.gartner.com/en/newsroom/press-releases/2021-10-20-gartner-forecasts-worldwide-it-spending-to-exceed-4-trillion-in-2022"),
    ("Gartner (21 Jan 2025) - Worldwide IT spending expected at $5.61T in 2025", "https://www.gartner.com/en/newsroom/press-releases/2025-01-21-gartner-forecasts-worldwide-it-spending-to-grow-9-point-8-percent-in-2025"),
    ("Gartner (25 Oct 2016) - IT spending forecast to reach $3.5T in 2017", "https://www.gartner.com/en/newsroom/press-releases/2016-10-25-gartner-says-it-spending-in-australia-to-reach-almost-85-billion-in-2017-as-the-battle-for-the-digital-platform-begins"),
    ("Gartner (28 Aug 2024) - Global information security spending estimated $183.9B in 2024; projected ~$212B in 2025", "https://www.gartner.com/en/newsroom/press-releases/2024-08-28-gartner-forecasts-global-information-security-spending-to-grow-15-percent-in-2025"),
    ("Gartner (29 Jul 2025) - Information security spend projected $213B in 2025 and $240B in 2026", "https://www.gartner.com/en/newsroom/press-releases/2025-07-29-gartner-forecasts-worldwide-end-user-spending-on-information-security-to-total-213-billion-us-dollars-in-2025"),
    ("Gartner (3 Feb 2026) - Worldwide IT spending forecast $6.15T in 2026; data center systems spend $496.2B (2025) and $653.4B (2026)", "https://www.gartner.com/en/newsroom/press-releases/2026-02-03-gartner-forecasts-worldwide-it-spending-to-grow-10-point-8-percent-in-2026-totaling-6-point-15-trillion-dollars"),
    ("Gartner (7 Jul 2016) - Worldwide IT spending forecast flat at $3.41T in 2016", "https://www.gartner.com/en/newsroom/press-releases/2016-07-07-gartner-says-worldwide-it-spending-is-forecast-to-be-flat-in-2016"),
    ("Gartner press release (15 Jul 2025) - Worldwide IT spending expected to total $5.43T in 2025 (+7.9%)", "https://www.gartner.com/en/newsroom/press-releases/2025-07-15-gartner-forecasts-worldwide-it-spending-to-grow-7-point-9-percent-in-2025"),
    ("GDPR legal text (Regulation (EU) 2016/679) - EUR-Lex", "https://eur-lex.europa.eu/eli/reg/2016/679/oj/eng"),
    ("Google Cloud Threat Intelligence - SolarWinds SUNBURST (Dec 2020)", "https://cloud.google.com/blog/topics/threat-intelligence/evasive-attacker-leverages-solarwinds-supply-chain-compromises-with-sunburst-backdoor"),
    ("Microsoft - Destructive malware targeting Ukrainian organisations (Jan 2022)", "https://www.microsoft.com/en-us/security/blog/2022/01/15/destructive-malware-targeting-ukrainian-organizations/"),
    ("Microsoft MSRC - Cyber threat activity in Ukraine (Feb 2022)", "https://www.microsoft.com/en-us/msrc/blog/2022/02/analysis-resources-cyber-threat-activity-ukraine/"),
    ("National Audit Office (UK) - Investigation: WannaCry cyber attack and the NHS (Oct 2017)", "https://www.nao.org.uk/reports/investigation-wannacry-cyber-attack-and-the-nhs/"),
    ("NIST NVD - CVE-2021-44228 (Log4Shell)", "https://nvd.nist.gov/vuln/detail/CVE-2021-44228"),
    ("NVIDIA Investor Relations (21 Feb 2024) - Fiscal 2024 results", "https://investor.nvidia.com/news/press-release-details/2024/NVIDIA-Announces-Financial-Results-for-Fourth-Quarter-and-Fiscal-2024/"),
    ("NVIDIA Newsroom (26 Feb 2025) - Q4 and Fiscal 2025 results", "https://nvidianews.nvidia.com/news/nvidia-announces-financial-results-for-fourth-quarter-and-fiscal-2025"),
    ("Ofcom - Media Nations 2021 (published 5 Aug 2021)", "https://www.ofcom.org.uk/media-use-and-attitudes/media-habits-adults/media-nations-2021"),
    ("OneWeb Chapter 11 filing (Mar 2020)", "https://www.space.com/oneweb-satellite-internet-startup-files-for-bankruptcy.html"),
    ("PwC - Global Entertainment & Media Outlook 2025-2029 insights", "https://www.pwc.com/gx/en/issues/business-model-reinvention/outlook/insights-and-perspectives.html"),
    ("Reuters (21 Feb 2024) - NVIDIA data center revenue growth and AI demand context", "https://www.reuters.com/technology/nvidia-forecasts-first-quarter-revenue-above-estimates-2024-02-21/"),
    ("Reuters (28 Mar 2020) - OneWeb files for Chapter 11 bankruptcy", "https://www.reuters.com/article/business/softbank-backed-oneweb-files-for-chapter-11-bankruptcy-plan-cuts-jobs-idUSKBN21F05P/"),
    ("Reuters (5 Apr 2019) - South Korean and US telcos roll out 5G services", "https://www.reuters.com/article/technology/south-korean-us-telcos-roll-out-5g-services-early-as-race-heats-up-idUSKCN1RF0KH/"),
    ("Reuters - EU says no pause on AI Act timeline (Jul 4, 2025)", "https://www.reuters.com/world/europe/artificial-intelligence-rules-go-ahead-no-pause-eu-commission-says-2025-07-04/"),
    ("Reuters - OneWeb emerges from bankruptcy with $1B equity investment (Nov 2020)", "https://www.reuters.com/business/aerospace-defense/british-satellite-firm-oneweb-emerges-bankruptcy-2020-11-20/"),
    ("Reuters - UK fibre deal references ~£3.5B investment narrative (Feb 2026)", "https://www.reuters.com/legal/transactional/virgin-media-o2-owners-buy-uk-fibre-firm-substantial-272-billion-2026-02-18/"),
    ("SK Telecom - 5G service launched April 3, 2019 (milestones press release)", "https://www.sktelecom.com/en/press/press_detail.do?idx=1451"),
    ("Synergy Research Group (18 Sept 2025) - Hyperscale capex $127B in Q2 2025; up 72% YoY", "https://www.srgresearch.com/articles/justifying-the-explosive-growth-in-hyperscale-capex"),
    ("Synergy Research Group (19 Nov 2025) - Q3 2025 cloud infrastructure services revenue $106.9B; trailing 12-month $390B", "https://www.srgresearch.com/articles/cloud-market-share-trends-big-three-together-hold-63-while-oracle-and-the-neoclouds-inch-higher"),
    ("US Department of Energy - Colonial Pipeline cyber incident (May 2021)", "https://www.energy.gov/ceser/colonial-pipeline-cyber-incident"),
    ("WIRED (Oct 2016) - Dyn DNS attack and Mirai botnet impact", "https://www.wired.com/story/internet-down-dyn-october-2016/"),
];
