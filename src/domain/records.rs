// Row domain models and the region/channel/metric vocabulary
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One of the two regional follower datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "AP")]
    AndhraPradesh,
    Telangana,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::AndhraPradesh, Region::Telangana];

    /// Short key used in requests and table names.
    pub fn key(&self) -> &'static str {
        match self {
            Region::AndhraPradesh => "AP",
            Region::Telangana => "Telangana",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Region::AndhraPradesh => "Andhra Pradesh",
            Region::Telangana => "Telangana",
        }
    }
}

/// Social platform tracked for follower counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    LinkedIn,
    Twitter,
    Instagram,
    Facebook,
}

impl Channel {
    /// Canonical order for cards and follower series.
    pub const ALL: [Channel; 4] = [
        Channel::LinkedIn,
        Channel::Twitter,
        Channel::Instagram,
        Channel::Facebook,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Channel::LinkedIn => "LinkedIn",
            Channel::Twitter => "Twitter",
            Channel::Instagram => "Instagram",
            Channel::Facebook => "Facebook",
        }
    }

    /// Position in the canonical order.
    pub fn index(&self) -> usize {
        match self {
            Channel::LinkedIn => 0,
            Channel::Twitter => 1,
            Channel::Instagram => 2,
            Channel::Facebook => 3,
        }
    }

    pub fn from_label(label: &str) -> Option<Channel> {
        Channel::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Performance metric column of the ad-campaign table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    Sales,
    Checkouts,
    Clicks,
    Leads,
    Reach,
    Impressions,
    CostPerResults,
    AmountSpent,
}

impl Metric {
    pub const ALL: [Metric; 8] = [
        Metric::Sales,
        Metric::Checkouts,
        Metric::Clicks,
        Metric::Leads,
        Metric::Reach,
        Metric::Impressions,
        Metric::CostPerResults,
        Metric::AmountSpent,
    ];

    /// Column header and display spelling.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Sales => "Sales",
            Metric::Checkouts => "Checkouts",
            Metric::Clicks => "Clicks",
            Metric::Leads => "Leads",
            Metric::Reach => "Reach",
            Metric::Impressions => "Impressions",
            Metric::CostPerResults => "Cost per results",
            Metric::AmountSpent => "Amount spent (INR)",
        }
    }

    pub fn from_label(label: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|m| m.label() == label)
    }
}

/// One observation of the ad-campaign table.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignRecord {
    pub date: NaiveDate,
    pub campaign: String,
    pub sales: f64,
    pub checkouts: f64,
    pub clicks: f64,
    pub leads: f64,
    pub reach: f64,
    pub impressions: f64,
    pub cost_per_results: f64,
    pub amount_spent: f64,
}

impl CampaignRecord {
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Sales => self.sales,
            Metric::Checkouts => self.checkouts,
            Metric::Clicks => self.clicks,
            Metric::Leads => self.leads,
            Metric::Reach => self.reach,
            Metric::Impressions => self.impressions,
            Metric::CostPerResults => self.cost_per_results,
            Metric::AmountSpent => self.amount_spent,
        }
    }
}

/// One observation of a regional follower table.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowerRecord {
    pub date: NaiveDate,
    pub linkedin: f64,
    pub twitter: f64,
    pub instagram: f64,
    pub facebook: f64,
}

impl FollowerRecord {
    pub fn channel(&self, channel: Channel) -> f64 {
        match channel {
            Channel::LinkedIn => self.linkedin,
            Channel::Twitter => self.twitter,
            Channel::Instagram => self.instagram,
            Channel::Facebook => self.facebook,
        }
    }
}
