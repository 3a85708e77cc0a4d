//! Conclusion catalogs
//!
//! A [`ConclusionMap`] maps exact specialism names to the paragraphs that
//! replace every year's `conclusion` section. The bundled master catalog covers
//! the fourteen specialisms of the published store; alternative catalogs can be
//! loaded from a JSON object file of the same shape.

use crate::error::{WriterError, WriterResult};
use std::collections::BTreeMap;
use std::path::Path;

/// Specialism name to replacement conclusion paragraphs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConclusionMap {
    entries: BTreeMap<String, Vec<String>>,
}

impl ConclusionMap {
    /// The bundled master catalog
    #[must_use]
    pub fn master() -> Self {
        MASTER_CONCLUSIONS
            .iter()
            .map(|(name, paragraphs)| {
                (
                    (*name).to_string(),
                    paragraphs.iter().map(|p| (*p).to_string()).collect(),
                )
            })
            .collect()
    }

    /// Load a catalog from a JSON file shaped `{"<specialism>": ["paragraph", ...]}`.
    ///
    /// # Errors
    /// - `WriterError::ReadConclusions` if the file cannot be read
    /// - `WriterError::MalformedConclusions` if it is not a JSON object of string lists
    pub fn from_path(path: impl AsRef<Path>) -> WriterResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| WriterError::ReadConclusions {
            path: path.to_path_buf(),
            source,
        })?;
        let entries = serde_json::from_str(&text).map_err(|source| {
            WriterError::MalformedConclusions {
                path: path.to_path_buf(),
                source,
            }
        })?;
        tracing::debug!(path = %path.display(), "loaded conclusion catalog");
        Ok(Self { entries })
    }

    /// Paragraphs for `specialism`; an empty entry counts as absent
    #[must_use]
    pub fn get(&self, specialism: &str) -> Option<&[String]> {
        self.entries
            .get(specialism)
            .map(Vec::as_slice)
            .filter(|paragraphs| !paragraphs.is_empty())
    }

    /// Add or replace one entry
    pub fn insert(&mut self, specialism: impl Into<String>, paragraphs: Vec<String>) {
        self.entries.insert(specialism.into(), paragraphs);
    }

    /// Specialism names in the catalog, alphabetically
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog has no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for ConclusionMap {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

const MASTER_CONCLUSIONS: &[(&str, [&str; 3])] = &[
    (
        "Network Automation",
        [
            "Across the decade, network automation has shifted from being an efficiency tool to becoming foundational infrastructure. What began as scripting and task acceleration has evolved into platform engineering, lifecycle management and compliance control at scale.",
            "The trajectory reflects complexity. Networks are larger, more distributed and more business critical than ever before. Human operated configuration alone is no longer sustainable in high velocity environments.",
            "Going forward, automation capability will define operational maturity. Organisations will prioritise engineers who can design, validate and evolve automated systems rather than simply operate individual devices.",
        ],
    ),
    (
        "Enterprise Networking",
        [
            "Enterprise networking has transitioned from static infrastructure to dynamic service architecture. Connectivity is no longer just about uptime but about experience, visibility and adaptability.",
            "As traffic patterns, applications and workforces decentralise, network design must anticipate change rather than react to it.",
            "The long term direction is clear. Enterprise networking roles increasingly require architectural thinking, policy driven control and cross domain awareness across cloud, edge and security environments.",
        ],
    ),
    (
        "Cloud & Infrastructure",
        [
            "Cloud and infrastructure have converged into unified platform thinking. The separation between on premises and cloud environments has steadily diminished as hybrid models became operational reality.",
            "Infrastructure is now measured by flexibility, resilience and scalability rather than hardware ownership.",
            "Over the next phase, engineers who understand distributed system behaviour, workload orchestration and platform design will define the next generation of infrastructure leadership.",
        ],
    ),
    (
        "Cybersecurity",
        [
            "Cybersecurity has evolved from perimeter defence into continuous risk management. The attack surface has expanded while regulatory expectations have intensified.",
            "Security is no longer a standalone function but an embedded discipline across infrastructure, identity, development and governance.",
            "The defining capability moving forward will be adaptability. Organisations will prioritise professionals who combine technical depth with strategic risk communication and cross functional awareness.",
        ],
    ),
    (
        "IP Networking",
        [
            "IP networking has become the universal transport layer underpinning nearly all modern connectivity. What was once a specialised domain is now foundational to cloud, mobile and enterprise ecosystems.",
            "Scalability, latency and resilience requirements have accelerated alongside data growth.",
            "Future IP environments will demand engineers capable of integrating physical infrastructure, software driven control and performance optimisation across distributed architectures.",
        ],
    ),
    (
        "Radio Frequency",
        [
            "Radio frequency engineering has progressed from coverage optimisation to real time performance orchestration. Spectrum efficiency and density management now operate at unprecedented scale.",
            "The complexity of modern deployments requires data driven modelling and adaptive optimisation.",
            "RF roles increasingly blend traditional engineering knowledge with analytics, automation and system level coordination.",
        ],
    ),
    (
        "Satellite",
        [
            "Satellite connectivity has transitioned from niche fallback solution to integrated component of global connectivity strategies.",
            "Reduced latency and expanded constellations have repositioned satellite within enterprise and resilience planning.",
            "The next phase will centre on hybrid integration, where satellite and terrestrial networks operate as coordinated layers within unified architectures.",
        ],
    ),
    (
        "Broadcasting",
        [
            "Broadcasting has shifted from hardware centric transmission to IP based content ecosystems. Infrastructure flexibility now defines competitiveness.",
            "Cloud integration and multi platform distribution have reshaped workflows.",
            "Future broadcasting expertise will depend on interoperability, software proficiency and the ability to operate within converged media and networking environments.",
        ],
    ),
    (
        "Fibre Networking",
        [
            "Fibre has moved from expansion phase to strategic backbone status. It underpins cloud growth, mobile evolution and enterprise transformation.",
            "Deployment maturity now focuses on scalability, resilience and long term demand forecasting rather than short term capacity fixes.",
            "Fibre engineering will remain central to digital infrastructure, requiring coordinated planning across technology, regulation and capital investment.",
        ],
    ),
    (
        "Civil Engineering",
        [
            "Civil engineering has become a primary enabler of digital infrastructure rather than a supporting afterthought.",
            "Large scale rollout programs require coordination, geospatial precision and regulatory alignment.",
            "As connectivity becomes essential infrastructure, civil roles will continue to expand in strategic importance across planning, sustainability and resilience.",
        ],
    ),
    (
        "AI Data Centers",
        [
            "AI data centres represent a structural transformation in compute design. Power density, cooling and interconnect performance now shape strategic location decisions.",
            "Infrastructure has shifted from general enterprise hosting to specialised high intensity compute environments.",
            "Sustained growth will depend on energy innovation, supply chain coordination and long term capital planning.",
        ],
    ),
    (
        "AI Software & Networks",
        [
            "AI software and networking have become interdependent domains. Model performance is increasingly constrained by network architecture rather than compute alone.",
            "Distributed training, inference and orchestration require tightly engineered data flows.",
            "Future AI ecosystems will prioritise low latency fabrics, topology optimisation and software defined network intelligence.",
        ],
    ),
    (
        "Data Centre IT",
        [
            "Data centre IT has evolved from server maintenance to platform operations. Workloads are dynamic, automated and increasingly AI driven.",
            "Operational excellence now requires observability, orchestration and cross environment integration.",
            "The next phase will emphasise workload optimisation, automation literacy and resilience across hybrid infrastructures.",
        ],
    ),
    (
        "Critical Facilities & Data Centre Construction",
        [
            "Critical facilities have emerged as a limiting factor in digital expansion. Power availability and cooling innovation now shape infrastructure viability.",
            "Construction strategy increasingly intersects with sustainability, grid integration and long term energy planning.",
            "The future of data centre construction will centre on enabling compute capacity at scale while balancing environmental and regulatory constraints.",
        ],
    ),
];
