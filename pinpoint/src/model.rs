/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// The action a recipient's device takes when they tap a push notification.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum Action {
    OpenApp,
    DeepLink,
    Url,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for Action {
    fn from(s: &str) -> Self {
        match s {
            "OPEN_APP" => Action::OpenApp,
            "DEEP_LINK" => Action::DeepLink,
            "URL" => Action::Url,
            other => Action::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for Action {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Action::from(s))
    }
}
impl Action {
    pub fn as_str(&self) -> &str {
        match self {
            Action::OpenApp => "OPEN_APP",
            Action::DeepLink => "DEEP_LINK",
            Action::Url => "URL",
            Action::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &[
            "OPEN_APP",
            "DEEP_LINK",
            "URL",
        ]
    }
}
impl AsRef<str> for Action {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum AttributeType {
    Inclusive,
    Exclusive,
    Contains,
    Before,
    After,
    On,
    Between,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for AttributeType {
    fn from(s: &str) -> Self {
        match s {
            "INCLUSIVE" => AttributeType::Inclusive,
            "EXCLUSIVE" => AttributeType::Exclusive,
            "CONTAINS" => AttributeType::Contains,
            "BEFORE" => AttributeType::Before,
            "AFTER" => AttributeType::After,
            "ON" => AttributeType::On,
            "BETWEEN" => AttributeType::Between,
            other => AttributeType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for AttributeType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(AttributeType::from(s))
    }
}
impl AttributeType {
    pub fn as_str(&self) -> &str {
        match self {
            AttributeType::Inclusive => "INCLUSIVE",
            AttributeType::Exclusive => "EXCLUSIVE",
            AttributeType::Contains => "CONTAINS",
            AttributeType::Before => "BEFORE",
            AttributeType::After => "AFTER",
            AttributeType::On => "ON",
            AttributeType::Between => "BETWEEN",
            AttributeType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &[
            "INCLUSIVE",
            "EXCLUSIVE",
            "CONTAINS",
            "BEFORE",
            "AFTER",
            "ON",
            "BETWEEN",
        ]
    }
}
impl AsRef<str> for AttributeType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for AttributeType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for AttributeType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum CampaignStatus {
    Scheduled,
    Executing,
    PendingNextRun,
    Completed,
    Paused,
    Deleted,
    Invalid,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for CampaignStatus {
    fn from(s: &str) -> Self {
        match s {
            "SCHEDULED" => CampaignStatus::Scheduled,
            "EXECUTING" => CampaignStatus::Executing,
            "PENDING_NEXT_RUN" => CampaignStatus::PendingNextRun,
            "COMPLETED" => CampaignStatus::Completed,
            "PAUSED" => CampaignStatus::Paused,
            "DELETED" => CampaignStatus::Deleted,
            "INVALID" => CampaignStatus::Invalid,
            other => CampaignStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for CampaignStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(CampaignStatus::from(s))
    }
}
impl CampaignStatus {
    pub fn as_str(&self) -> &str {
        match self {
            CampaignStatus::Scheduled => "SCHEDULED",
            CampaignStatus::Executing => "EXECUTING",
            CampaignStatus::PendingNextRun => "PENDING_NEXT_RUN",
            CampaignStatus::Completed => "COMPLETED",
            CampaignStatus::Paused => "PAUSED",
            CampaignStatus::Deleted => "DELETED",
            CampaignStatus::Invalid => "INVALID",
            CampaignStatus::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &[
            "SCHEDULED",
            "EXECUTING",
            "PENDING_NEXT_RUN",
            "COMPLETED",
            "PAUSED",
            "DELETED",
            "INVALID",
        ]
    }
}
impl AsRef<str> for CampaignStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for CampaignStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for CampaignStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// The channel an endpoint or address receives messages on.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ChannelType {
    Push,
    Gcm,
    Apns,
    ApnsSandbox,
    ApnsVoip,
    ApnsVoipSandbox,
    Adm,
    Sms,
    Voice,
    Email,
    Baidu,
    Custom,
    InApp,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ChannelType {
    fn from(s: &str) -> Self {
        match s {
            "PUSH" => ChannelType::Push,
            "GCM" => ChannelType::Gcm,
            "APNS" => ChannelType::Apns,
            "APNS_SANDBOX" => ChannelType::ApnsSandbox,
            "APNS_VOIP" => ChannelType::ApnsVoip,
            "APNS_VOIP_SANDBOX" => ChannelType::ApnsVoipSandbox,
            "ADM" => ChannelType::Adm,
            "SMS" => ChannelType::Sms,
            "VOICE" => ChannelType::Voice,
            "EMAIL" => ChannelType::Email,
            "BAIDU" => ChannelType::Baidu,
            "CUSTOM" => ChannelType::Custom,
            "IN_APP" => ChannelType::InApp,
            other => ChannelType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ChannelType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ChannelType::from(s))
    }
}
impl ChannelType {
    pub fn as_str(&self) -> &str {
        match self {
            ChannelType::Push => "PUSH",
            ChannelType::Gcm => "GCM",
            ChannelType::Apns => "APNS",
            ChannelType::ApnsSandbox => "APNS_SANDBOX",
            ChannelType::ApnsVoip => "APNS_VOIP",
            ChannelType::ApnsVoipSandbox => "APNS_VOIP_SANDBOX",
            ChannelType::Adm => "ADM",
            ChannelType::Sms => "SMS",
            ChannelType::Voice => "VOICE",
            ChannelType::Email => "EMAIL",
            ChannelType::Baidu => "BAIDU",
            ChannelType::Custom => "CUSTOM",
            ChannelType::InApp => "IN_APP",
            ChannelType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &[
            "PUSH",
            "GCM",
            "APNS",
            "APNS_SANDBOX",
            "APNS_VOIP",
            "APNS_VOIP_SANDBOX",
            "ADM",
            "SMS",
            "VOICE",
            "EMAIL",
            "BAIDU",
            "CUSTOM",
            "IN_APP",
        ]
    }
}
impl AsRef<str> for ChannelType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ChannelType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ChannelType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// The outcome of delivering a message to a single endpoint or address.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum DeliveryStatus {
    Successful,
    Throttled,
    TemporaryFailure,
    PermanentFailure,
    UnknownFailure,
    OptOut,
    Duplicate,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for DeliveryStatus {
    fn from(s: &str) -> Self {
        match s {
            "SUCCESSFUL" => DeliveryStatus::Successful,
            "THROTTLED" => DeliveryStatus::Throttled,
            "TEMPORARY_FAILURE" => DeliveryStatus::TemporaryFailure,
            "PERMANENT_FAILURE" => DeliveryStatus::PermanentFailure,
            "UNKNOWN_FAILURE" => DeliveryStatus::UnknownFailure,
            "OPT_OUT" => DeliveryStatus::OptOut,
            "DUPLICATE" => DeliveryStatus::Duplicate,
            other => DeliveryStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for DeliveryStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DeliveryStatus::from(s))
    }
}
impl DeliveryStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DeliveryStatus::Successful => "SUCCESSFUL",
            DeliveryStatus::Throttled => "THROTTLED",
            DeliveryStatus::TemporaryFailure => "TEMPORARY_FAILURE",
            DeliveryStatus::PermanentFailure => "PERMANENT_FAILURE",
            DeliveryStatus::UnknownFailure => "UNKNOWN_FAILURE",
            DeliveryStatus::OptOut => "OPT_OUT",
            DeliveryStatus::Duplicate => "DUPLICATE",
            DeliveryStatus::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &[
            "SUCCESSFUL",
            "THROTTLED",
            "TEMPORARY_FAILURE",
            "PERMANENT_FAILURE",
            "UNKNOWN_FAILURE",
            "OPT_OUT",
            "DUPLICATE",
        ]
    }
}
impl AsRef<str> for DeliveryStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for DeliveryStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for DeliveryStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum DimensionType {
    Inclusive,
    Exclusive,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for DimensionType {
    fn from(s: &str) -> Self {
        match s {
            "INCLUSIVE" => DimensionType::Inclusive,
            "EXCLUSIVE" => DimensionType::Exclusive,
            other => DimensionType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for DimensionType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DimensionType::from(s))
    }
}
impl DimensionType {
    pub fn as_str(&self) -> &str {
        match self {
            DimensionType::Inclusive => "INCLUSIVE",
            DimensionType::Exclusive => "EXCLUSIVE",
            DimensionType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &[
            "INCLUSIVE",
            "EXCLUSIVE",
        ]
    }
}
impl AsRef<str> for DimensionType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for DimensionType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for DimensionType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// The window of time used by a [`RecencyDimension`](crate::model::RecencyDimension).
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum Duration {
    Hr24,
    Day7,
    Day14,
    Day30,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for Duration {
    fn from(s: &str) -> Self {
        match s {
            "HR_24" => Duration::Hr24,
            "DAY_7" => Duration::Day7,
            "DAY_14" => Duration::Day14,
            "DAY_30" => Duration::Day30,
            other => Duration::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for Duration {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Duration::from(s))
    }
}
impl Duration {
    pub fn as_str(&self) -> &str {
        match self {
            Duration::Hr24 => "HR_24",
            Duration::Day7 => "DAY_7",
            Duration::Day14 => "DAY_14",
            Duration::Day30 => "DAY_30",
            Duration::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &[
            "HR_24",
            "DAY_7",
            "DAY_14",
            "DAY_30",
        ]
    }
}
impl AsRef<str> for Duration {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum Format {
    Csv,
    Json,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for Format {
    fn from(s: &str) -> Self {
        match s {
            "CSV" => Format::Csv,
            "JSON" => Format::Json,
            other => Format::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for Format {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Format::from(s))
    }
}
impl Format {
    pub fn as_str(&self) -> &str {
        match self {
            Format::Csv => "CSV",
            Format::Json => "JSON",
            Format::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &[
            "CSV",
            "JSON",
        ]
    }
}
impl AsRef<str> for Format {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for Format {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for Format {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// How often a campaign runs.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum Frequency {
    Once,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Event,
    InAppEvent,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for Frequency {
    fn from(s: &str) -> Self {
        match s {
            "ONCE" => Frequency::Once,
            "HOURLY" => Frequency::Hourly,
            "DAILY" => Frequency::Daily,
            "WEEKLY" => Frequency::Weekly,
            "MONTHLY" => Frequency::Monthly,
            "EVENT" => Frequency::Event,
            "IN_APP_EVENT" => Frequency::InAppEvent,
            other => Frequency::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for Frequency {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Frequency::from(s))
    }
}
impl Frequency {
    pub fn as_str(&self) -> &str {
        match self {
            Frequency::Once => "ONCE",
            Frequency::Hourly => "HOURLY",
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Event => "EVENT",
            Frequency::InAppEvent => "IN_APP_EVENT",
            Frequency::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &[
            "ONCE",
            "HOURLY",
            "DAILY",
            "WEEKLY",
            "MONTHLY",
            "EVENT",
            "IN_APP_EVENT",
        ]
    }
}
impl AsRef<str> for Frequency {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for Frequency {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for Frequency {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// The lifecycle state of an import job.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum JobStatus {
    Created,
    PreparingForInitialization,
    Initializing,
    Processing,
    PendingJob,
    Completing,
    Completed,
    Failing,
    Failed,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for JobStatus {
    fn from(s: &str) -> Self {
        match s {
            "CREATED" => JobStatus::Created,
            "PREPARING_FOR_INITIALIZATION" => JobStatus::PreparingForInitialization,
            "INITIALIZING" => JobStatus::Initializing,
            "PROCESSING" => JobStatus::Processing,
            "PENDING_JOB" => JobStatus::PendingJob,
            "COMPLETING" => JobStatus::Completing,
            "COMPLETED" => JobStatus::Completed,
            "FAILING" => JobStatus::Failing,
            "FAILED" => JobStatus::Failed,
            other => JobStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for JobStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(JobStatus::from(s))
    }
}
impl JobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Created => "CREATED",
            JobStatus::PreparingForInitialization => "PREPARING_FOR_INITIALIZATION",
            JobStatus::Initializing => "INITIALIZING",
            JobStatus::Processing => "PROCESSING",
            JobStatus::PendingJob => "PENDING_JOB",
            JobStatus::Completing => "COMPLETING",
            JobStatus::Completed => "COMPLETED",
            JobStatus::Failing => "FAILING",
            JobStatus::Failed => "FAILED",
            JobStatus::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &[
            "CREATED",
            "PREPARING_FOR_INITIALIZATION",
            "INITIALIZING",
            "PROCESSING",
            "PENDING_JOB",
            "COMPLETING",
            "COMPLETED",
            "FAILING",
            "FAILED",
        ]
    }
}
impl AsRef<str> for JobStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for JobStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for JobStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum MessageType {
    Transactional,
    Promotional,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for MessageType {
    fn from(s: &str) -> Self {
        match s {
            "TRANSACTIONAL" => MessageType::Transactional,
            "PROMOTIONAL" => MessageType::Promotional,
            other => MessageType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for MessageType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(MessageType::from(s))
    }
}
impl MessageType {
    pub fn as_str(&self) -> &str {
        match self {
            MessageType::Transactional => "TRANSACTIONAL",
            MessageType::Promotional => "PROMOTIONAL",
            MessageType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &[
            "TRANSACTIONAL",
            "PROMOTIONAL",
        ]
    }
}
impl AsRef<str> for MessageType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for MessageType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for MessageType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum Mode {
    Delivery,
    Filter,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for Mode {
    fn from(s: &str) -> Self {
        match s {
            "DELIVERY" => Mode::Delivery,
            "FILTER" => Mode::Filter,
            other => Mode::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for Mode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Mode::from(s))
    }
}
impl Mode {
    pub fn as_str(&self) -> &str {
        match self {
            Mode::Delivery => "DELIVERY",
            Mode::Filter => "FILTER",
            Mode::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &[
            "DELIVERY",
            "FILTER",
        ]
    }
}
impl AsRef<str> for Mode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for Mode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for Mode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum RecencyType {
    Active,
    Inactive,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for RecencyType {
    fn from(s: &str) -> Self {
        match s {
            "ACTIVE" => RecencyType::Active,
            "INACTIVE" => RecencyType::Inactive,
            other => RecencyType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for RecencyType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(RecencyType::from(s))
    }
}
impl RecencyType {
    pub fn as_str(&self) -> &str {
        match self {
            RecencyType::Active => "ACTIVE",
            RecencyType::Inactive => "INACTIVE",
            RecencyType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &[
            "ACTIVE",
            "INACTIVE",
        ]
    }
}
impl AsRef<str> for RecencyType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for RecencyType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for RecencyType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum SegmentType {
    Dimensional,
    Import,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for SegmentType {
    fn from(s: &str) -> Self {
        match s {
            "DIMENSIONAL" => SegmentType::Dimensional,
            "IMPORT" => SegmentType::Import,
            other => SegmentType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for SegmentType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SegmentType::from(s))
    }
}
impl SegmentType {
    pub fn as_str(&self) -> &str {
        match self {
            SegmentType::Dimensional => "DIMENSIONAL",
            SegmentType::Import => "IMPORT",
            SegmentType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &[
            "DIMENSIONAL",
            "IMPORT",
        ]
    }
}
impl AsRef<str> for SegmentType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for SegmentType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for SegmentType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// The status of a journey.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum State {
    Draft,
    Active,
    Completed,
    Cancelled,
    Closed,
    Paused,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for State {
    fn from(s: &str) -> Self {
        match s {
            "DRAFT" => State::Draft,
            "ACTIVE" => State::Active,
            "COMPLETED" => State::Completed,
            "CANCELLED" => State::Cancelled,
            "CLOSED" => State::Closed,
            "PAUSED" => State::Paused,
            other => State::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for State {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(State::from(s))
    }
}
impl State {
    pub fn as_str(&self) -> &str {
        match self {
            State::Draft => "DRAFT",
            State::Active => "ACTIVE",
            State::Completed => "COMPLETED",
            State::Cancelled => "CANCELLED",
            State::Closed => "CLOSED",
            State::Paused => "PAUSED",
            State::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &[
            "DRAFT",
            "ACTIVE",
            "COMPLETED",
            "CANCELLED",
            "CLOSED",
            "PAUSED",
        ]
    }
}
impl AsRef<str> for State {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for State {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for State {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum TemplateType {
    Email,
    Sms,
    Voice,
    Push,
    Inapp,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for TemplateType {
    fn from(s: &str) -> Self {
        match s {
            "EMAIL" => TemplateType::Email,
            "SMS" => TemplateType::Sms,
            "VOICE" => TemplateType::Voice,
            "PUSH" => TemplateType::Push,
            "INAPP" => TemplateType::Inapp,
            other => TemplateType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for TemplateType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(TemplateType::from(s))
    }
}
impl TemplateType {
    pub fn as_str(&self) -> &str {
        match self {
            TemplateType::Email => "EMAIL",
            TemplateType::Sms => "SMS",
            TemplateType::Voice => "VOICE",
            TemplateType::Push => "PUSH",
            TemplateType::Inapp => "INAPP",
            TemplateType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &[
            "EMAIL",
            "SMS",
            "VOICE",
            "PUSH",
            "INAPP",
        ]
    }
}
impl AsRef<str> for TemplateType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for TemplateType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for TemplateType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(data.as_str()))
    }
}

/// Specifies the status and settings of the APNs (Apple Push Notification service) channel for an
/// application.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct ApnsChannelRequest {
    #[serde(rename = "BundleId", skip_serializing_if = "Option::is_none")]
    pub bundle_id: std::option::Option<std::string::String>,
    /// The APNs client certificate that you received from Apple, if you want Amazon Pinpoint to
    /// communicate with APNs by using an APNs certificate.
    #[serde(rename = "Certificate", skip_serializing_if = "Option::is_none")]
    pub certificate: std::option::Option<std::string::String>,
    /// The default authentication method that you want Amazon Pinpoint to use when authenticating
    /// with APNs, `CERTIFICATE` or `TOKEN`.
    #[serde(rename = "DefaultAuthenticationMethod", skip_serializing_if = "Option::is_none")]
    pub default_authentication_method: std::option::Option<std::string::String>,
    /// Specifies whether to enable the APNs channel for the application.
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: std::option::Option<bool>,
    #[serde(rename = "PrivateKey", skip_serializing_if = "Option::is_none")]
    pub private_key: std::option::Option<std::string::String>,
    #[serde(rename = "TeamId", skip_serializing_if = "Option::is_none")]
    pub team_id: std::option::Option<std::string::String>,
    #[serde(rename = "TokenKey", skip_serializing_if = "Option::is_none")]
    pub token_key: std::option::Option<std::string::String>,
    #[serde(rename = "TokenKeyId", skip_serializing_if = "Option::is_none")]
    pub token_key_id: std::option::Option<std::string::String>,
}
impl ApnsChannelRequest {
    pub fn bundle_id(&self) -> std::option::Option<&str> {
        self.bundle_id.as_deref()
    }
    pub fn certificate(&self) -> std::option::Option<&str> {
        self.certificate.as_deref()
    }
    pub fn default_authentication_method(&self) -> std::option::Option<&str> {
        self.default_authentication_method.as_deref()
    }
    pub fn enabled(&self) -> std::option::Option<bool> {
        self.enabled
    }
    pub fn private_key(&self) -> std::option::Option<&str> {
        self.private_key.as_deref()
    }
    pub fn team_id(&self) -> std::option::Option<&str> {
        self.team_id.as_deref()
    }
    pub fn token_key(&self) -> std::option::Option<&str> {
        self.token_key.as_deref()
    }
    pub fn token_key_id(&self) -> std::option::Option<&str> {
        self.token_key_id.as_deref()
    }
}
/// See [`ApnsChannelRequest`](crate::model::ApnsChannelRequest)
pub mod apns_channel_request {
    /// A builder for [`ApnsChannelRequest`](crate::model::ApnsChannelRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) bundle_id: std::option::Option<std::string::String>,
        pub(crate) certificate: std::option::Option<std::string::String>,
        pub(crate) default_authentication_method: std::option::Option<std::string::String>,
        pub(crate) enabled: std::option::Option<bool>,
        pub(crate) private_key: std::option::Option<std::string::String>,
        pub(crate) team_id: std::option::Option<std::string::String>,
        pub(crate) token_key: std::option::Option<std::string::String>,
        pub(crate) token_key_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn bundle_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.bundle_id = Some(input.into());
            self
        }
        pub fn set_bundle_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.bundle_id = input;
            self
        }
        pub fn certificate(mut self, input: impl Into<std::string::String>) -> Self {
            self.certificate = Some(input.into());
            self
        }
        pub fn set_certificate(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.certificate = input;
            self
        }
        pub fn default_authentication_method(mut self, input: impl Into<std::string::String>) -> Self {
            self.default_authentication_method = Some(input.into());
            self
        }
        pub fn set_default_authentication_method(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.default_authentication_method = input;
            self
        }
        pub fn enabled(mut self, input: bool) -> Self {
            self.enabled = Some(input);
            self
        }
        pub fn set_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.enabled = input;
            self
        }
        pub fn private_key(mut self, input: impl Into<std::string::String>) -> Self {
            self.private_key = Some(input.into());
            self
        }
        pub fn set_private_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.private_key = input;
            self
        }
        pub fn team_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.team_id = Some(input.into());
            self
        }
        pub fn set_team_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.team_id = input;
            self
        }
        pub fn token_key(mut self, input: impl Into<std::string::String>) -> Self {
            self.token_key = Some(input.into());
            self
        }
        pub fn set_token_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.token_key = input;
            self
        }
        pub fn token_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.token_key_id = Some(input.into());
            self
        }
        pub fn set_token_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.token_key_id = input;
            self
        }
        /// Consumes the builder and constructs a [`ApnsChannelRequest`](crate::model::ApnsChannelRequest)
        pub fn build(self) -> crate::model::ApnsChannelRequest {
            crate::model::ApnsChannelRequest {
                bundle_id: self.bundle_id,
                certificate: self.certificate,
                default_authentication_method: self.default_authentication_method,
                enabled: self.enabled,
                private_key: self.private_key,
                team_id: self.team_id,
                token_key: self.token_key,
                token_key_id: self.token_key_id,
            }
        }
    }
}
impl ApnsChannelRequest {
    /// Creates a new builder-style object to manufacture [`ApnsChannelRequest`](crate::model::ApnsChannelRequest)
    pub fn builder() -> crate::model::apns_channel_request::Builder {
        crate::model::apns_channel_request::Builder::default()
    }
}

/// Provides information about the status and settings of the APNs channel for an application.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct ApnsChannelResponse {
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub application_id: std::option::Option<std::string::String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub creation_date: std::option::Option<std::string::String>,
    #[serde(rename = "DefaultAuthenticationMethod", skip_serializing_if = "Option::is_none")]
    pub default_authentication_method: std::option::Option<std::string::String>,
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: std::option::Option<bool>,
    #[serde(rename = "HasCredential", skip_serializing_if = "Option::is_none")]
    pub has_credential: std::option::Option<bool>,
    #[serde(rename = "HasTokenKey", skip_serializing_if = "Option::is_none")]
    pub has_token_key: std::option::Option<bool>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: std::option::Option<std::string::String>,
    #[serde(rename = "IsArchived", skip_serializing_if = "Option::is_none")]
    pub is_archived: std::option::Option<bool>,
    #[serde(rename = "LastModifiedBy", skip_serializing_if = "Option::is_none")]
    pub last_modified_by: std::option::Option<std::string::String>,
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub last_modified_date: std::option::Option<std::string::String>,
    #[serde(rename = "Platform", skip_serializing_if = "Option::is_none")]
    pub platform: std::option::Option<std::string::String>,
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub version: std::option::Option<i32>,
}
impl ApnsChannelResponse {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn creation_date(&self) -> std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    pub fn default_authentication_method(&self) -> std::option::Option<&str> {
        self.default_authentication_method.as_deref()
    }
    pub fn enabled(&self) -> std::option::Option<bool> {
        self.enabled
    }
    pub fn has_credential(&self) -> std::option::Option<bool> {
        self.has_credential
    }
    pub fn has_token_key(&self) -> std::option::Option<bool> {
        self.has_token_key
    }
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    pub fn is_archived(&self) -> std::option::Option<bool> {
        self.is_archived
    }
    pub fn last_modified_by(&self) -> std::option::Option<&str> {
        self.last_modified_by.as_deref()
    }
    pub fn last_modified_date(&self) -> std::option::Option<&str> {
        self.last_modified_date.as_deref()
    }
    pub fn platform(&self) -> std::option::Option<&str> {
        self.platform.as_deref()
    }
    pub fn version(&self) -> std::option::Option<i32> {
        self.version
    }
}
/// See [`ApnsChannelResponse`](crate::model::ApnsChannelResponse)
pub mod apns_channel_response {
    /// A builder for [`ApnsChannelResponse`](crate::model::ApnsChannelResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) creation_date: std::option::Option<std::string::String>,
        pub(crate) default_authentication_method: std::option::Option<std::string::String>,
        pub(crate) enabled: std::option::Option<bool>,
        pub(crate) has_credential: std::option::Option<bool>,
        pub(crate) has_token_key: std::option::Option<bool>,
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) is_archived: std::option::Option<bool>,
        pub(crate) last_modified_by: std::option::Option<std::string::String>,
        pub(crate) last_modified_date: std::option::Option<std::string::String>,
        pub(crate) platform: std::option::Option<std::string::String>,
        pub(crate) version: std::option::Option<i32>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn creation_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.creation_date = Some(input.into());
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creation_date = input;
            self
        }
        pub fn default_authentication_method(mut self, input: impl Into<std::string::String>) -> Self {
            self.default_authentication_method = Some(input.into());
            self
        }
        pub fn set_default_authentication_method(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.default_authentication_method = input;
            self
        }
        pub fn enabled(mut self, input: bool) -> Self {
            self.enabled = Some(input);
            self
        }
        pub fn set_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.enabled = input;
            self
        }
        pub fn has_credential(mut self, input: bool) -> Self {
            self.has_credential = Some(input);
            self
        }
        pub fn set_has_credential(mut self, input: std::option::Option<bool>) -> Self {
            self.has_credential = input;
            self
        }
        pub fn has_token_key(mut self, input: bool) -> Self {
            self.has_token_key = Some(input);
            self
        }
        pub fn set_has_token_key(mut self, input: std::option::Option<bool>) -> Self {
            self.has_token_key = input;
            self
        }
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn is_archived(mut self, input: bool) -> Self {
            self.is_archived = Some(input);
            self
        }
        pub fn set_is_archived(mut self, input: std::option::Option<bool>) -> Self {
            self.is_archived = input;
            self
        }
        pub fn last_modified_by(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_modified_by = Some(input.into());
            self
        }
        pub fn set_last_modified_by(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.last_modified_by = input;
            self
        }
        pub fn last_modified_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_modified_date = Some(input.into());
            self
        }
        pub fn set_last_modified_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.last_modified_date = input;
            self
        }
        pub fn platform(mut self, input: impl Into<std::string::String>) -> Self {
            self.platform = Some(input.into());
            self
        }
        pub fn set_platform(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.platform = input;
            self
        }
        pub fn version(mut self, input: i32) -> Self {
            self.version = Some(input);
            self
        }
        pub fn set_version(mut self, input: std::option::Option<i32>) -> Self {
            self.version = input;
            self
        }
        /// Consumes the builder and constructs a [`ApnsChannelResponse`](crate::model::ApnsChannelResponse)
        pub fn build(self) -> crate::model::ApnsChannelResponse {
            crate::model::ApnsChannelResponse {
                application_id: self.application_id,
                creation_date: self.creation_date,
                default_authentication_method: self.default_authentication_method,
                enabled: self.enabled,
                has_credential: self.has_credential,
                has_token_key: self.has_token_key,
                id: self.id,
                is_archived: self.is_archived,
                last_modified_by: self.last_modified_by,
                last_modified_date: self.last_modified_date,
                platform: self.platform,
                version: self.version,
            }
        }
    }
}
impl ApnsChannelResponse {
    /// Creates a new builder-style object to manufacture [`ApnsChannelResponse`](crate::model::ApnsChannelResponse)
    pub fn builder() -> crate::model::apns_channel_response::Builder {
        crate::model::apns_channel_response::Builder::default()
    }
}

/// Specifies the status and settings of the GCM channel for an application. This channel enables
/// Amazon Pinpoint to send push notifications through the Firebase Cloud Messaging (FCM), formerly
/// Google Cloud Messaging (GCM), service.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct GcmChannelRequest {
    /// The Web API Key, also referred to as an _API_KEY_ or _server key_, that you received from
    /// Google to communicate with Google services.
    #[serde(rename = "ApiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: std::option::Option<std::string::String>,
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: std::option::Option<bool>,
}
impl GcmChannelRequest {
    pub fn api_key(&self) -> std::option::Option<&str> {
        self.api_key.as_deref()
    }
    pub fn enabled(&self) -> std::option::Option<bool> {
        self.enabled
    }
}
/// See [`GcmChannelRequest`](crate::model::GcmChannelRequest)
pub mod gcm_channel_request {
    /// A builder for [`GcmChannelRequest`](crate::model::GcmChannelRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) api_key: std::option::Option<std::string::String>,
        pub(crate) enabled: std::option::Option<bool>,
    }
    impl Builder {
        pub fn api_key(mut self, input: impl Into<std::string::String>) -> Self {
            self.api_key = Some(input.into());
            self
        }
        pub fn set_api_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.api_key = input;
            self
        }
        pub fn enabled(mut self, input: bool) -> Self {
            self.enabled = Some(input);
            self
        }
        pub fn set_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.enabled = input;
            self
        }
        /// Consumes the builder and constructs a [`GcmChannelRequest`](crate::model::GcmChannelRequest)
        pub fn build(self) -> crate::model::GcmChannelRequest {
            crate::model::GcmChannelRequest {
                api_key: self.api_key,
                enabled: self.enabled,
            }
        }
    }
}
impl GcmChannelRequest {
    /// Creates a new builder-style object to manufacture [`GcmChannelRequest`](crate::model::GcmChannelRequest)
    pub fn builder() -> crate::model::gcm_channel_request::Builder {
        crate::model::gcm_channel_request::Builder::default()
    }
}

/// Provides information about the status and settings of the GCM channel for an application.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct GcmChannelResponse {
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub application_id: std::option::Option<std::string::String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub creation_date: std::option::Option<std::string::String>,
    #[serde(rename = "Credential", skip_serializing_if = "Option::is_none")]
    pub credential: std::option::Option<std::string::String>,
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: std::option::Option<bool>,
    #[serde(rename = "HasCredential", skip_serializing_if = "Option::is_none")]
    pub has_credential: std::option::Option<bool>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: std::option::Option<std::string::String>,
    #[serde(rename = "IsArchived", skip_serializing_if = "Option::is_none")]
    pub is_archived: std::option::Option<bool>,
    #[serde(rename = "LastModifiedBy", skip_serializing_if = "Option::is_none")]
    pub last_modified_by: std::option::Option<std::string::String>,
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub last_modified_date: std::option::Option<std::string::String>,
    #[serde(rename = "Platform", skip_serializing_if = "Option::is_none")]
    pub platform: std::option::Option<std::string::String>,
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub version: std::option::Option<i32>,
}
impl GcmChannelResponse {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn creation_date(&self) -> std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    pub fn credential(&self) -> std::option::Option<&str> {
        self.credential.as_deref()
    }
    pub fn enabled(&self) -> std::option::Option<bool> {
        self.enabled
    }
    pub fn has_credential(&self) -> std::option::Option<bool> {
        self.has_credential
    }
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    pub fn is_archived(&self) -> std::option::Option<bool> {
        self.is_archived
    }
    pub fn last_modified_by(&self) -> std::option::Option<&str> {
        self.last_modified_by.as_deref()
    }
    pub fn last_modified_date(&self) -> std::option::Option<&str> {
        self.last_modified_date.as_deref()
    }
    pub fn platform(&self) -> std::option::Option<&str> {
        self.platform.as_deref()
    }
    pub fn version(&self) -> std::option::Option<i32> {
        self.version
    }
}
/// See [`GcmChannelResponse`](crate::model::GcmChannelResponse)
pub mod gcm_channel_response {
    /// A builder for [`GcmChannelResponse`](crate::model::GcmChannelResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) creation_date: std::option::Option<std::string::String>,
        pub(crate) credential: std::option::Option<std::string::String>,
        pub(crate) enabled: std::option::Option<bool>,
        pub(crate) has_credential: std::option::Option<bool>,
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) is_archived: std::option::Option<bool>,
        pub(crate) last_modified_by: std::option::Option<std::string::String>,
        pub(crate) last_modified_date: std::option::Option<std::string::String>,
        pub(crate) platform: std::option::Option<std::string::String>,
        pub(crate) version: std::option::Option<i32>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn creation_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.creation_date = Some(input.into());
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creation_date = input;
            self
        }
        pub fn credential(mut self, input: impl Into<std::string::String>) -> Self {
            self.credential = Some(input.into());
            self
        }
        pub fn set_credential(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.credential = input;
            self
        }
        pub fn enabled(mut self, input: bool) -> Self {
            self.enabled = Some(input);
            self
        }
        pub fn set_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.enabled = input;
            self
        }
        pub fn has_credential(mut self, input: bool) -> Self {
            self.has_credential = Some(input);
            self
        }
        pub fn set_has_credential(mut self, input: std::option::Option<bool>) -> Self {
            self.has_credential = input;
            self
        }
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn is_archived(mut self, input: bool) -> Self {
            self.is_archived = Some(input);
            self
        }
        pub fn set_is_archived(mut self, input: std::option::Option<bool>) -> Self {
            self.is_archived = input;
            self
        }
        pub fn last_modified_by(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_modified_by = Some(input.into());
            self
        }
        pub fn set_last_modified_by(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.last_modified_by = input;
            self
        }
        pub fn last_modified_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_modified_date = Some(input.into());
            self
        }
        pub fn set_last_modified_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.last_modified_date = input;
            self
        }
        pub fn platform(mut self, input: impl Into<std::string::String>) -> Self {
            self.platform = Some(input.into());
            self
        }
        pub fn set_platform(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.platform = input;
            self
        }
        pub fn version(mut self, input: i32) -> Self {
            self.version = Some(input);
            self
        }
        pub fn set_version(mut self, input: std::option::Option<i32>) -> Self {
            self.version = input;
            self
        }
        /// Consumes the builder and constructs a [`GcmChannelResponse`](crate::model::GcmChannelResponse)
        pub fn build(self) -> crate::model::GcmChannelResponse {
            crate::model::GcmChannelResponse {
                application_id: self.application_id,
                creation_date: self.creation_date,
                credential: self.credential,
                enabled: self.enabled,
                has_credential: self.has_credential,
                id: self.id,
                is_archived: self.is_archived,
                last_modified_by: self.last_modified_by,
                last_modified_date: self.last_modified_date,
                platform: self.platform,
                version: self.version,
            }
        }
    }
}
impl GcmChannelResponse {
    /// Creates a new builder-style object to manufacture [`GcmChannelResponse`](crate::model::GcmChannelResponse)
    pub fn builder() -> crate::model::gcm_channel_response::Builder {
        crate::model::gcm_channel_response::Builder::default()
    }
}

/// Provides information about an application, including the default settings for an application.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct ApplicationSettingsResource {
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub application_id: std::option::Option<std::string::String>,
    #[serde(rename = "CampaignHook", skip_serializing_if = "Option::is_none")]
    pub campaign_hook: std::option::Option<crate::model::CampaignHook>,
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub last_modified_date: std::option::Option<std::string::String>,
    #[serde(rename = "Limits", skip_serializing_if = "Option::is_none")]
    pub limits: std::option::Option<crate::model::CampaignLimits>,
    #[serde(rename = "QuietTime", skip_serializing_if = "Option::is_none")]
    pub quiet_time: std::option::Option<crate::model::QuietTime>,
}
impl ApplicationSettingsResource {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn campaign_hook(&self) -> std::option::Option<&crate::model::CampaignHook> {
        self.campaign_hook.as_ref()
    }
    pub fn last_modified_date(&self) -> std::option::Option<&str> {
        self.last_modified_date.as_deref()
    }
    pub fn limits(&self) -> std::option::Option<&crate::model::CampaignLimits> {
        self.limits.as_ref()
    }
    pub fn quiet_time(&self) -> std::option::Option<&crate::model::QuietTime> {
        self.quiet_time.as_ref()
    }
}
/// See [`ApplicationSettingsResource`](crate::model::ApplicationSettingsResource)
pub mod application_settings_resource {
    /// A builder for [`ApplicationSettingsResource`](crate::model::ApplicationSettingsResource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) campaign_hook: std::option::Option<crate::model::CampaignHook>,
        pub(crate) last_modified_date: std::option::Option<std::string::String>,
        pub(crate) limits: std::option::Option<crate::model::CampaignLimits>,
        pub(crate) quiet_time: std::option::Option<crate::model::QuietTime>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn campaign_hook(mut self, input: crate::model::CampaignHook) -> Self {
            self.campaign_hook = Some(input);
            self
        }
        pub fn set_campaign_hook(mut self, input: std::option::Option<crate::model::CampaignHook>) -> Self {
            self.campaign_hook = input;
            self
        }
        pub fn last_modified_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_modified_date = Some(input.into());
            self
        }
        pub fn set_last_modified_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.last_modified_date = input;
            self
        }
        pub fn limits(mut self, input: crate::model::CampaignLimits) -> Self {
            self.limits = Some(input);
            self
        }
        pub fn set_limits(mut self, input: std::option::Option<crate::model::CampaignLimits>) -> Self {
            self.limits = input;
            self
        }
        pub fn quiet_time(mut self, input: crate::model::QuietTime) -> Self {
            self.quiet_time = Some(input);
            self
        }
        pub fn set_quiet_time(mut self, input: std::option::Option<crate::model::QuietTime>) -> Self {
            self.quiet_time = input;
            self
        }
        /// Consumes the builder and constructs a [`ApplicationSettingsResource`](crate::model::ApplicationSettingsResource)
        pub fn build(self) -> crate::model::ApplicationSettingsResource {
            crate::model::ApplicationSettingsResource {
                application_id: self.application_id,
                campaign_hook: self.campaign_hook,
                last_modified_date: self.last_modified_date,
                limits: self.limits,
                quiet_time: self.quiet_time,
            }
        }
    }
}
impl ApplicationSettingsResource {
    /// Creates a new builder-style object to manufacture [`ApplicationSettingsResource`](crate::model::ApplicationSettingsResource)
    pub fn builder() -> crate::model::application_settings_resource::Builder {
        crate::model::application_settings_resource::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct WriteApplicationSettingsRequest {
    #[serde(rename = "CampaignHook", skip_serializing_if = "Option::is_none")]
    pub campaign_hook: std::option::Option<crate::model::CampaignHook>,
    #[serde(rename = "CloudWatchMetricsEnabled", skip_serializing_if = "Option::is_none")]
    pub cloud_watch_metrics_enabled: std::option::Option<bool>,
    #[serde(rename = "EventTaggingEnabled", skip_serializing_if = "Option::is_none")]
    pub event_tagging_enabled: std::option::Option<bool>,
    #[serde(rename = "Limits", skip_serializing_if = "Option::is_none")]
    pub limits: std::option::Option<crate::model::CampaignLimits>,
    #[serde(rename = "QuietTime", skip_serializing_if = "Option::is_none")]
    pub quiet_time: std::option::Option<crate::model::QuietTime>,
}
impl WriteApplicationSettingsRequest {
    pub fn campaign_hook(&self) -> std::option::Option<&crate::model::CampaignHook> {
        self.campaign_hook.as_ref()
    }
    pub fn cloud_watch_metrics_enabled(&self) -> std::option::Option<bool> {
        self.cloud_watch_metrics_enabled
    }
    pub fn event_tagging_enabled(&self) -> std::option::Option<bool> {
        self.event_tagging_enabled
    }
    pub fn limits(&self) -> std::option::Option<&crate::model::CampaignLimits> {
        self.limits.as_ref()
    }
    pub fn quiet_time(&self) -> std::option::Option<&crate::model::QuietTime> {
        self.quiet_time.as_ref()
    }
}
/// See [`WriteApplicationSettingsRequest`](crate::model::WriteApplicationSettingsRequest)
pub mod write_application_settings_request {
    /// A builder for [`WriteApplicationSettingsRequest`](crate::model::WriteApplicationSettingsRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaign_hook: std::option::Option<crate::model::CampaignHook>,
        pub(crate) cloud_watch_metrics_enabled: std::option::Option<bool>,
        pub(crate) event_tagging_enabled: std::option::Option<bool>,
        pub(crate) limits: std::option::Option<crate::model::CampaignLimits>,
        pub(crate) quiet_time: std::option::Option<crate::model::QuietTime>,
    }
    impl Builder {
        pub fn campaign_hook(mut self, input: crate::model::CampaignHook) -> Self {
            self.campaign_hook = Some(input);
            self
        }
        pub fn set_campaign_hook(mut self, input: std::option::Option<crate::model::CampaignHook>) -> Self {
            self.campaign_hook = input;
            self
        }
        pub fn cloud_watch_metrics_enabled(mut self, input: bool) -> Self {
            self.cloud_watch_metrics_enabled = Some(input);
            self
        }
        pub fn set_cloud_watch_metrics_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.cloud_watch_metrics_enabled = input;
            self
        }
        pub fn event_tagging_enabled(mut self, input: bool) -> Self {
            self.event_tagging_enabled = Some(input);
            self
        }
        pub fn set_event_tagging_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.event_tagging_enabled = input;
            self
        }
        pub fn limits(mut self, input: crate::model::CampaignLimits) -> Self {
            self.limits = Some(input);
            self
        }
        pub fn set_limits(mut self, input: std::option::Option<crate::model::CampaignLimits>) -> Self {
            self.limits = input;
            self
        }
        pub fn quiet_time(mut self, input: crate::model::QuietTime) -> Self {
            self.quiet_time = Some(input);
            self
        }
        pub fn set_quiet_time(mut self, input: std::option::Option<crate::model::QuietTime>) -> Self {
            self.quiet_time = input;
            self
        }
        /// Consumes the builder and constructs a [`WriteApplicationSettingsRequest`](crate::model::WriteApplicationSettingsRequest)
        pub fn build(self) -> crate::model::WriteApplicationSettingsRequest {
            crate::model::WriteApplicationSettingsRequest {
                campaign_hook: self.campaign_hook,
                cloud_watch_metrics_enabled: self.cloud_watch_metrics_enabled,
                event_tagging_enabled: self.event_tagging_enabled,
                limits: self.limits,
                quiet_time: self.quiet_time,
            }
        }
    }
}
impl WriteApplicationSettingsRequest {
    /// Creates a new builder-style object to manufacture [`WriteApplicationSettingsRequest`](crate::model::WriteApplicationSettingsRequest)
    pub fn builder() -> crate::model::write_application_settings_request::Builder {
        crate::model::write_application_settings_request::Builder::default()
    }
}

/// Specifies settings for invoking an AWS Lambda function that customizes a segment for a campaign.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct CampaignHook {
    #[serde(rename = "LambdaFunctionName", skip_serializing_if = "Option::is_none")]
    pub lambda_function_name: std::option::Option<std::string::String>,
    #[serde(rename = "Mode", skip_serializing_if = "Option::is_none")]
    pub mode: std::option::Option<crate::model::Mode>,
    #[serde(rename = "WebUrl", skip_serializing_if = "Option::is_none")]
    pub web_url: std::option::Option<std::string::String>,
}
impl CampaignHook {
    pub fn lambda_function_name(&self) -> std::option::Option<&str> {
        self.lambda_function_name.as_deref()
    }
    pub fn mode(&self) -> std::option::Option<&crate::model::Mode> {
        self.mode.as_ref()
    }
    pub fn web_url(&self) -> std::option::Option<&str> {
        self.web_url.as_deref()
    }
}
/// See [`CampaignHook`](crate::model::CampaignHook)
pub mod campaign_hook {
    /// A builder for [`CampaignHook`](crate::model::CampaignHook)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) lambda_function_name: std::option::Option<std::string::String>,
        pub(crate) mode: std::option::Option<crate::model::Mode>,
        pub(crate) web_url: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn lambda_function_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.lambda_function_name = Some(input.into());
            self
        }
        pub fn set_lambda_function_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.lambda_function_name = input;
            self
        }
        pub fn mode(mut self, input: crate::model::Mode) -> Self {
            self.mode = Some(input);
            self
        }
        pub fn set_mode(mut self, input: std::option::Option<crate::model::Mode>) -> Self {
            self.mode = input;
            self
        }
        pub fn web_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.web_url = Some(input.into());
            self
        }
        pub fn set_web_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.web_url = input;
            self
        }
        /// Consumes the builder and constructs a [`CampaignHook`](crate::model::CampaignHook)
        pub fn build(self) -> crate::model::CampaignHook {
            crate::model::CampaignHook {
                lambda_function_name: self.lambda_function_name,
                mode: self.mode,
                web_url: self.web_url,
            }
        }
    }
}
impl CampaignHook {
    /// Creates a new builder-style object to manufacture [`CampaignHook`](crate::model::CampaignHook)
    pub fn builder() -> crate::model::campaign_hook::Builder {
        crate::model::campaign_hook::Builder::default()
    }
}

/// Specifies limits on the messages that a campaign can send.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct CampaignLimits {
    #[serde(rename = "Daily", skip_serializing_if = "Option::is_none")]
    pub daily: std::option::Option<i32>,
    /// The maximum amount of time, in seconds, that a campaign can attempt to deliver a message
    /// after the scheduled start time for the campaign. The minimum value is 60 seconds.
    #[serde(rename = "MaximumDuration", skip_serializing_if = "Option::is_none")]
    pub maximum_duration: std::option::Option<i32>,
    /// The maximum number of messages that a campaign can send each second. The minimum value is
    /// 50. The maximum value is 20,000.
    #[serde(rename = "MessagesPerSecond", skip_serializing_if = "Option::is_none")]
    pub messages_per_second: std::option::Option<i32>,
    #[serde(rename = "Session", skip_serializing_if = "Option::is_none")]
    pub session: std::option::Option<i32>,
    #[serde(rename = "Total", skip_serializing_if = "Option::is_none")]
    pub total: std::option::Option<i32>,
}
impl CampaignLimits {
    pub fn daily(&self) -> std::option::Option<i32> {
        self.daily
    }
    pub fn maximum_duration(&self) -> std::option::Option<i32> {
        self.maximum_duration
    }
    pub fn messages_per_second(&self) -> std::option::Option<i32> {
        self.messages_per_second
    }
    pub fn session(&self) -> std::option::Option<i32> {
        self.session
    }
    pub fn total(&self) -> std::option::Option<i32> {
        self.total
    }
}
/// See [`CampaignLimits`](crate::model::CampaignLimits)
pub mod campaign_limits {
    /// A builder for [`CampaignLimits`](crate::model::CampaignLimits)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) daily: std::option::Option<i32>,
        pub(crate) maximum_duration: std::option::Option<i32>,
        pub(crate) messages_per_second: std::option::Option<i32>,
        pub(crate) session: std::option::Option<i32>,
        pub(crate) total: std::option::Option<i32>,
    }
    impl Builder {
        pub fn daily(mut self, input: i32) -> Self {
            self.daily = Some(input);
            self
        }
        pub fn set_daily(mut self, input: std::option::Option<i32>) -> Self {
            self.daily = input;
            self
        }
        pub fn maximum_duration(mut self, input: i32) -> Self {
            self.maximum_duration = Some(input);
            self
        }
        pub fn set_maximum_duration(mut self, input: std::option::Option<i32>) -> Self {
            self.maximum_duration = input;
            self
        }
        pub fn messages_per_second(mut self, input: i32) -> Self {
            self.messages_per_second = Some(input);
            self
        }
        pub fn set_messages_per_second(mut self, input: std::option::Option<i32>) -> Self {
            self.messages_per_second = input;
            self
        }
        pub fn session(mut self, input: i32) -> Self {
            self.session = Some(input);
            self
        }
        pub fn set_session(mut self, input: std::option::Option<i32>) -> Self {
            self.session = input;
            self
        }
        pub fn total(mut self, input: i32) -> Self {
            self.total = Some(input);
            self
        }
        pub fn set_total(mut self, input: std::option::Option<i32>) -> Self {
            self.total = input;
            self
        }
        /// Consumes the builder and constructs a [`CampaignLimits`](crate::model::CampaignLimits)
        pub fn build(self) -> crate::model::CampaignLimits {
            crate::model::CampaignLimits {
                daily: self.daily,
                maximum_duration: self.maximum_duration,
                messages_per_second: self.messages_per_second,
                session: self.session,
                total: self.total,
            }
        }
    }
}
impl CampaignLimits {
    /// Creates a new builder-style object to manufacture [`CampaignLimits`](crate::model::CampaignLimits)
    pub fn builder() -> crate::model::campaign_limits::Builder {
        crate::model::campaign_limits::Builder::default()
    }
}

/// Specifies the start and end times that define a time range when messages aren't sent to
/// endpoints.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct QuietTime {
    /// The specific time when quiet time ends, in `HH:mm` format.
    #[serde(rename = "End", skip_serializing_if = "Option::is_none")]
    pub end: std::option::Option<std::string::String>,
    /// The specific time when quiet time begins, in `HH:mm` format.
    #[serde(rename = "Start", skip_serializing_if = "Option::is_none")]
    pub start: std::option::Option<std::string::String>,
}
impl QuietTime {
    pub fn end(&self) -> std::option::Option<&str> {
        self.end.as_deref()
    }
    pub fn start(&self) -> std::option::Option<&str> {
        self.start.as_deref()
    }
}
/// See [`QuietTime`](crate::model::QuietTime)
pub mod quiet_time {
    /// A builder for [`QuietTime`](crate::model::QuietTime)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) end: std::option::Option<std::string::String>,
        pub(crate) start: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn end(mut self, input: impl Into<std::string::String>) -> Self {
            self.end = Some(input.into());
            self
        }
        pub fn set_end(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.end = input;
            self
        }
        pub fn start(mut self, input: impl Into<std::string::String>) -> Self {
            self.start = Some(input.into());
            self
        }
        pub fn set_start(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.start = input;
            self
        }
        /// Consumes the builder and constructs a [`QuietTime`](crate::model::QuietTime)
        pub fn build(self) -> crate::model::QuietTime {
            crate::model::QuietTime {
                end: self.end,
                start: self.start,
            }
        }
    }
}
impl QuietTime {
    /// Creates a new builder-style object to manufacture [`QuietTime`](crate::model::QuietTime)
    pub fn builder() -> crate::model::quiet_time::Builder {
        crate::model::quiet_time::Builder::default()
    }
}

/// Specifies the configuration and other settings for a campaign.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct WriteCampaignRequest {
    #[serde(rename = "AdditionalTreatments", skip_serializing_if = "Option::is_none")]
    pub additional_treatments: std::option::Option<std::vec::Vec<crate::model::WriteTreatmentResource>>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "HoldoutPercent", skip_serializing_if = "Option::is_none")]
    pub holdout_percent: std::option::Option<i32>,
    #[serde(rename = "Hook", skip_serializing_if = "Option::is_none")]
    pub hook: std::option::Option<crate::model::CampaignHook>,
    #[serde(rename = "IsPaused", skip_serializing_if = "Option::is_none")]
    pub is_paused: std::option::Option<bool>,
    #[serde(rename = "Limits", skip_serializing_if = "Option::is_none")]
    pub limits: std::option::Option<crate::model::CampaignLimits>,
    #[serde(rename = "MessageConfiguration", skip_serializing_if = "Option::is_none")]
    pub message_configuration: std::option::Option<crate::model::MessageConfiguration>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "Priority", skip_serializing_if = "Option::is_none")]
    pub priority: std::option::Option<i32>,
    #[serde(rename = "Schedule", skip_serializing_if = "Option::is_none")]
    pub schedule: std::option::Option<crate::model::Schedule>,
    #[serde(rename = "SegmentId", skip_serializing_if = "Option::is_none")]
    pub segment_id: std::option::Option<std::string::String>,
    #[serde(rename = "SegmentVersion", skip_serializing_if = "Option::is_none")]
    pub segment_version: std::option::Option<i32>,
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "TreatmentDescription", skip_serializing_if = "Option::is_none")]
    pub treatment_description: std::option::Option<std::string::String>,
    #[serde(rename = "TreatmentName", skip_serializing_if = "Option::is_none")]
    pub treatment_name: std::option::Option<std::string::String>,
}
impl WriteCampaignRequest {
    pub fn additional_treatments(&self) -> std::option::Option<&[crate::model::WriteTreatmentResource]> {
        self.additional_treatments.as_deref()
    }
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }
    pub fn holdout_percent(&self) -> std::option::Option<i32> {
        self.holdout_percent
    }
    pub fn hook(&self) -> std::option::Option<&crate::model::CampaignHook> {
        self.hook.as_ref()
    }
    pub fn is_paused(&self) -> std::option::Option<bool> {
        self.is_paused
    }
    pub fn limits(&self) -> std::option::Option<&crate::model::CampaignLimits> {
        self.limits.as_ref()
    }
    pub fn message_configuration(&self) -> std::option::Option<&crate::model::MessageConfiguration> {
        self.message_configuration.as_ref()
    }
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    pub fn priority(&self) -> std::option::Option<i32> {
        self.priority
    }
    pub fn schedule(&self) -> std::option::Option<&crate::model::Schedule> {
        self.schedule.as_ref()
    }
    pub fn segment_id(&self) -> std::option::Option<&str> {
        self.segment_id.as_deref()
    }
    pub fn segment_version(&self) -> std::option::Option<i32> {
        self.segment_version
    }
    pub fn tags(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.tags.as_ref()
    }
    pub fn treatment_description(&self) -> std::option::Option<&str> {
        self.treatment_description.as_deref()
    }
    pub fn treatment_name(&self) -> std::option::Option<&str> {
        self.treatment_name.as_deref()
    }
}
/// See [`WriteCampaignRequest`](crate::model::WriteCampaignRequest)
pub mod write_campaign_request {
    /// A builder for [`WriteCampaignRequest`](crate::model::WriteCampaignRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) additional_treatments: std::option::Option<std::vec::Vec<crate::model::WriteTreatmentResource>>,
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) holdout_percent: std::option::Option<i32>,
        pub(crate) hook: std::option::Option<crate::model::CampaignHook>,
        pub(crate) is_paused: std::option::Option<bool>,
        pub(crate) limits: std::option::Option<crate::model::CampaignLimits>,
        pub(crate) message_configuration: std::option::Option<crate::model::MessageConfiguration>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) priority: std::option::Option<i32>,
        pub(crate) schedule: std::option::Option<crate::model::Schedule>,
        pub(crate) segment_id: std::option::Option<std::string::String>,
        pub(crate) segment_version: std::option::Option<i32>,
        pub(crate) tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) treatment_description: std::option::Option<std::string::String>,
        pub(crate) treatment_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `additional_treatments`.
        ///
        /// To override the contents of this collection use [`set_additional_treatments`](Self::set_additional_treatments).
        pub fn additional_treatments(mut self, input: impl Into<crate::model::WriteTreatmentResource>) -> Self {
            let mut v = self.additional_treatments.unwrap_or_default();
            v.push(input.into());
            self.additional_treatments = Some(v);
            self
        }
        pub fn set_additional_treatments(mut self, input: std::option::Option<std::vec::Vec<crate::model::WriteTreatmentResource>>) -> Self {
            self.additional_treatments = input;
            self
        }
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        pub fn holdout_percent(mut self, input: i32) -> Self {
            self.holdout_percent = Some(input);
            self
        }
        pub fn set_holdout_percent(mut self, input: std::option::Option<i32>) -> Self {
            self.holdout_percent = input;
            self
        }
        pub fn hook(mut self, input: crate::model::CampaignHook) -> Self {
            self.hook = Some(input);
            self
        }
        pub fn set_hook(mut self, input: std::option::Option<crate::model::CampaignHook>) -> Self {
            self.hook = input;
            self
        }
        pub fn is_paused(mut self, input: bool) -> Self {
            self.is_paused = Some(input);
            self
        }
        pub fn set_is_paused(mut self, input: std::option::Option<bool>) -> Self {
            self.is_paused = input;
            self
        }
        pub fn limits(mut self, input: crate::model::CampaignLimits) -> Self {
            self.limits = Some(input);
            self
        }
        pub fn set_limits(mut self, input: std::option::Option<crate::model::CampaignLimits>) -> Self {
            self.limits = input;
            self
        }
        pub fn message_configuration(mut self, input: crate::model::MessageConfiguration) -> Self {
            self.message_configuration = Some(input);
            self
        }
        pub fn set_message_configuration(mut self, input: std::option::Option<crate::model::MessageConfiguration>) -> Self {
            self.message_configuration = input;
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn priority(mut self, input: i32) -> Self {
            self.priority = Some(input);
            self
        }
        pub fn set_priority(mut self, input: std::option::Option<i32>) -> Self {
            self.priority = input;
            self
        }
        pub fn schedule(mut self, input: crate::model::Schedule) -> Self {
            self.schedule = Some(input);
            self
        }
        pub fn set_schedule(mut self, input: std::option::Option<crate::model::Schedule>) -> Self {
            self.schedule = input;
            self
        }
        pub fn segment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.segment_id = Some(input.into());
            self
        }
        pub fn set_segment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.segment_id = input;
            self
        }
        pub fn segment_version(mut self, input: i32) -> Self {
            self.segment_version = Some(input);
            self
        }
        pub fn set_segment_version(mut self, input: std::option::Option<i32>) -> Self {
            self.segment_version = input;
            self
        }
        /// Adds a key-value pair to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        pub fn treatment_description(mut self, input: impl Into<std::string::String>) -> Self {
            self.treatment_description = Some(input.into());
            self
        }
        pub fn set_treatment_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.treatment_description = input;
            self
        }
        pub fn treatment_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.treatment_name = Some(input.into());
            self
        }
        pub fn set_treatment_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.treatment_name = input;
            self
        }
        /// Consumes the builder and constructs a [`WriteCampaignRequest`](crate::model::WriteCampaignRequest)
        pub fn build(self) -> crate::model::WriteCampaignRequest {
            crate::model::WriteCampaignRequest {
                additional_treatments: self.additional_treatments,
                description: self.description,
                holdout_percent: self.holdout_percent,
                hook: self.hook,
                is_paused: self.is_paused,
                limits: self.limits,
                message_configuration: self.message_configuration,
                name: self.name,
                priority: self.priority,
                schedule: self.schedule,
                segment_id: self.segment_id,
                segment_version: self.segment_version,
                tags: self.tags,
                treatment_description: self.treatment_description,
                treatment_name: self.treatment_name,
            }
        }
    }
}
impl WriteCampaignRequest {
    /// Creates a new builder-style object to manufacture [`WriteCampaignRequest`](crate::model::WriteCampaignRequest)
    pub fn builder() -> crate::model::write_campaign_request::Builder {
        crate::model::write_campaign_request::Builder::default()
    }
}

/// Provides information about the status, configuration, and other settings for a campaign.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct CampaignResponse {
    #[serde(rename = "AdditionalTreatments", skip_serializing_if = "Option::is_none")]
    pub additional_treatments: std::option::Option<std::vec::Vec<crate::model::TreatmentResource>>,
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub application_id: std::option::Option<std::string::String>,
    #[serde(rename = "Arn", skip_serializing_if = "Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub creation_date: std::option::Option<std::string::String>,
    #[serde(rename = "DefaultState", skip_serializing_if = "Option::is_none")]
    pub default_state: std::option::Option<crate::model::CampaignState>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "HoldoutPercent", skip_serializing_if = "Option::is_none")]
    pub holdout_percent: std::option::Option<i32>,
    #[serde(rename = "Hook", skip_serializing_if = "Option::is_none")]
    pub hook: std::option::Option<crate::model::CampaignHook>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: std::option::Option<std::string::String>,
    #[serde(rename = "IsPaused", skip_serializing_if = "Option::is_none")]
    pub is_paused: std::option::Option<bool>,
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub last_modified_date: std::option::Option<std::string::String>,
    #[serde(rename = "Limits", skip_serializing_if = "Option::is_none")]
    pub limits: std::option::Option<crate::model::CampaignLimits>,
    #[serde(rename = "MessageConfiguration", skip_serializing_if = "Option::is_none")]
    pub message_configuration: std::option::Option<crate::model::MessageConfiguration>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "Priority", skip_serializing_if = "Option::is_none")]
    pub priority: std::option::Option<i32>,
    #[serde(rename = "Schedule", skip_serializing_if = "Option::is_none")]
    pub schedule: std::option::Option<crate::model::Schedule>,
    #[serde(rename = "SegmentId", skip_serializing_if = "Option::is_none")]
    pub segment_id: std::option::Option<std::string::String>,
    #[serde(rename = "SegmentVersion", skip_serializing_if = "Option::is_none")]
    pub segment_version: std::option::Option<i32>,
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: std::option::Option<crate::model::CampaignState>,
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "TreatmentDescription", skip_serializing_if = "Option::is_none")]
    pub treatment_description: std::option::Option<std::string::String>,
    #[serde(rename = "TreatmentName", skip_serializing_if = "Option::is_none")]
    pub treatment_name: std::option::Option<std::string::String>,
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub version: std::option::Option<i32>,
}
impl CampaignResponse {
    pub fn additional_treatments(&self) -> std::option::Option<&[crate::model::TreatmentResource]> {
        self.additional_treatments.as_deref()
    }
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn arn(&self) -> std::option::Option<&str> {
        self.arn.as_deref()
    }
    pub fn creation_date(&self) -> std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    pub fn default_state(&self) -> std::option::Option<&crate::model::CampaignState> {
        self.default_state.as_ref()
    }
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }
    pub fn holdout_percent(&self) -> std::option::Option<i32> {
        self.holdout_percent
    }
    pub fn hook(&self) -> std::option::Option<&crate::model::CampaignHook> {
        self.hook.as_ref()
    }
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    pub fn is_paused(&self) -> std::option::Option<bool> {
        self.is_paused
    }
    pub fn last_modified_date(&self) -> std::option::Option<&str> {
        self.last_modified_date.as_deref()
    }
    pub fn limits(&self) -> std::option::Option<&crate::model::CampaignLimits> {
        self.limits.as_ref()
    }
    pub fn message_configuration(&self) -> std::option::Option<&crate::model::MessageConfiguration> {
        self.message_configuration.as_ref()
    }
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    pub fn priority(&self) -> std::option::Option<i32> {
        self.priority
    }
    pub fn schedule(&self) -> std::option::Option<&crate::model::Schedule> {
        self.schedule.as_ref()
    }
    pub fn segment_id(&self) -> std::option::Option<&str> {
        self.segment_id.as_deref()
    }
    pub fn segment_version(&self) -> std::option::Option<i32> {
        self.segment_version
    }
    pub fn state(&self) -> std::option::Option<&crate::model::CampaignState> {
        self.state.as_ref()
    }
    pub fn tags(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.tags.as_ref()
    }
    pub fn treatment_description(&self) -> std::option::Option<&str> {
        self.treatment_description.as_deref()
    }
    pub fn treatment_name(&self) -> std::option::Option<&str> {
        self.treatment_name.as_deref()
    }
    pub fn version(&self) -> std::option::Option<i32> {
        self.version
    }
}
/// See [`CampaignResponse`](crate::model::CampaignResponse)
pub mod campaign_response {
    /// A builder for [`CampaignResponse`](crate::model::CampaignResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) additional_treatments: std::option::Option<std::vec::Vec<crate::model::TreatmentResource>>,
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) arn: std::option::Option<std::string::String>,
        pub(crate) creation_date: std::option::Option<std::string::String>,
        pub(crate) default_state: std::option::Option<crate::model::CampaignState>,
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) holdout_percent: std::option::Option<i32>,
        pub(crate) hook: std::option::Option<crate::model::CampaignHook>,
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) is_paused: std::option::Option<bool>,
        pub(crate) last_modified_date: std::option::Option<std::string::String>,
        pub(crate) limits: std::option::Option<crate::model::CampaignLimits>,
        pub(crate) message_configuration: std::option::Option<crate::model::MessageConfiguration>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) priority: std::option::Option<i32>,
        pub(crate) schedule: std::option::Option<crate::model::Schedule>,
        pub(crate) segment_id: std::option::Option<std::string::String>,
        pub(crate) segment_version: std::option::Option<i32>,
        pub(crate) state: std::option::Option<crate::model::CampaignState>,
        pub(crate) tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) treatment_description: std::option::Option<std::string::String>,
        pub(crate) treatment_name: std::option::Option<std::string::String>,
        pub(crate) version: std::option::Option<i32>,
    }
    impl Builder {
        /// Appends an item to `additional_treatments`.
        ///
        /// To override the contents of this collection use [`set_additional_treatments`](Self::set_additional_treatments).
        pub fn additional_treatments(mut self, input: impl Into<crate::model::TreatmentResource>) -> Self {
            let mut v = self.additional_treatments.unwrap_or_default();
            v.push(input.into());
            self.additional_treatments = Some(v);
            self
        }
        pub fn set_additional_treatments(mut self, input: std::option::Option<std::vec::Vec<crate::model::TreatmentResource>>) -> Self {
            self.additional_treatments = input;
            self
        }
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        pub fn creation_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.creation_date = Some(input.into());
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creation_date = input;
            self
        }
        pub fn default_state(mut self, input: crate::model::CampaignState) -> Self {
            self.default_state = Some(input);
            self
        }
        pub fn set_default_state(mut self, input: std::option::Option<crate::model::CampaignState>) -> Self {
            self.default_state = input;
            self
        }
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        pub fn holdout_percent(mut self, input: i32) -> Self {
            self.holdout_percent = Some(input);
            self
        }
        pub fn set_holdout_percent(mut self, input: std::option::Option<i32>) -> Self {
            self.holdout_percent = input;
            self
        }
        pub fn hook(mut self, input: crate::model::CampaignHook) -> Self {
            self.hook = Some(input);
            self
        }
        pub fn set_hook(mut self, input: std::option::Option<crate::model::CampaignHook>) -> Self {
            self.hook = input;
            self
        }
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn is_paused(mut self, input: bool) -> Self {
            self.is_paused = Some(input);
            self
        }
        pub fn set_is_paused(mut self, input: std::option::Option<bool>) -> Self {
            self.is_paused = input;
            self
        }
        pub fn last_modified_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_modified_date = Some(input.into());
            self
        }
        pub fn set_last_modified_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.last_modified_date = input;
            self
        }
        pub fn limits(mut self, input: crate::model::CampaignLimits) -> Self {
            self.limits = Some(input);
            self
        }
        pub fn set_limits(mut self, input: std::option::Option<crate::model::CampaignLimits>) -> Self {
            self.limits = input;
            self
        }
        pub fn message_configuration(mut self, input: crate::model::MessageConfiguration) -> Self {
            self.message_configuration = Some(input);
            self
        }
        pub fn set_message_configuration(mut self, input: std::option::Option<crate::model::MessageConfiguration>) -> Self {
            self.message_configuration = input;
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn priority(mut self, input: i32) -> Self {
            self.priority = Some(input);
            self
        }
        pub fn set_priority(mut self, input: std::option::Option<i32>) -> Self {
            self.priority = input;
            self
        }
        pub fn schedule(mut self, input: crate::model::Schedule) -> Self {
            self.schedule = Some(input);
            self
        }
        pub fn set_schedule(mut self, input: std::option::Option<crate::model::Schedule>) -> Self {
            self.schedule = input;
            self
        }
        pub fn segment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.segment_id = Some(input.into());
            self
        }
        pub fn set_segment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.segment_id = input;
            self
        }
        pub fn segment_version(mut self, input: i32) -> Self {
            self.segment_version = Some(input);
            self
        }
        pub fn set_segment_version(mut self, input: std::option::Option<i32>) -> Self {
            self.segment_version = input;
            self
        }
        pub fn state(mut self, input: crate::model::CampaignState) -> Self {
            self.state = Some(input);
            self
        }
        pub fn set_state(mut self, input: std::option::Option<crate::model::CampaignState>) -> Self {
            self.state = input;
            self
        }
        /// Adds a key-value pair to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        pub fn treatment_description(mut self, input: impl Into<std::string::String>) -> Self {
            self.treatment_description = Some(input.into());
            self
        }
        pub fn set_treatment_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.treatment_description = input;
            self
        }
        pub fn treatment_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.treatment_name = Some(input.into());
            self
        }
        pub fn set_treatment_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.treatment_name = input;
            self
        }
        pub fn version(mut self, input: i32) -> Self {
            self.version = Some(input);
            self
        }
        pub fn set_version(mut self, input: std::option::Option<i32>) -> Self {
            self.version = input;
            self
        }
        /// Consumes the builder and constructs a [`CampaignResponse`](crate::model::CampaignResponse)
        pub fn build(self) -> crate::model::CampaignResponse {
            crate::model::CampaignResponse {
                additional_treatments: self.additional_treatments,
                application_id: self.application_id,
                arn: self.arn,
                creation_date: self.creation_date,
                default_state: self.default_state,
                description: self.description,
                holdout_percent: self.holdout_percent,
                hook: self.hook,
                id: self.id,
                is_paused: self.is_paused,
                last_modified_date: self.last_modified_date,
                limits: self.limits,
                message_configuration: self.message_configuration,
                name: self.name,
                priority: self.priority,
                schedule: self.schedule,
                segment_id: self.segment_id,
                segment_version: self.segment_version,
                state: self.state,
                tags: self.tags,
                treatment_description: self.treatment_description,
                treatment_name: self.treatment_name,
                version: self.version,
            }
        }
    }
}
impl CampaignResponse {
    /// Creates a new builder-style object to manufacture [`CampaignResponse`](crate::model::CampaignResponse)
    pub fn builder() -> crate::model::campaign_response::Builder {
        crate::model::campaign_response::Builder::default()
    }
}

/// Provides information about the configuration and other settings for all the campaigns that are
/// associated with an application.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct CampaignsResponse {
    #[serde(rename = "Item", skip_serializing_if = "Option::is_none")]
    pub item: std::option::Option<std::vec::Vec<crate::model::CampaignResponse>>,
    /// The string to use in a subsequent request to get the next page of results in a paginated
    /// response.
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl CampaignsResponse {
    pub fn item(&self) -> std::option::Option<&[crate::model::CampaignResponse]> {
        self.item.as_deref()
    }
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
/// See [`CampaignsResponse`](crate::model::CampaignsResponse)
pub mod campaigns_response {
    /// A builder for [`CampaignsResponse`](crate::model::CampaignsResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) item: std::option::Option<std::vec::Vec<crate::model::CampaignResponse>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `item`.
        ///
        /// To override the contents of this collection use [`set_item`](Self::set_item).
        pub fn item(mut self, input: impl Into<crate::model::CampaignResponse>) -> Self {
            let mut v = self.item.unwrap_or_default();
            v.push(input.into());
            self.item = Some(v);
            self
        }
        pub fn set_item(mut self, input: std::option::Option<std::vec::Vec<crate::model::CampaignResponse>>) -> Self {
            self.item = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`CampaignsResponse`](crate::model::CampaignsResponse)
        pub fn build(self) -> crate::model::CampaignsResponse {
            crate::model::CampaignsResponse {
                item: self.item,
                next_token: self.next_token,
            }
        }
    }
}
impl CampaignsResponse {
    /// Creates a new builder-style object to manufacture [`CampaignsResponse`](crate::model::CampaignsResponse)
    pub fn builder() -> crate::model::campaigns_response::Builder {
        crate::model::campaigns_response::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct CampaignState {
    #[serde(rename = "CampaignStatus", skip_serializing_if = "Option::is_none")]
    pub campaign_status: std::option::Option<crate::model::CampaignStatus>,
}
impl CampaignState {
    pub fn campaign_status(&self) -> std::option::Option<&crate::model::CampaignStatus> {
        self.campaign_status.as_ref()
    }
}
/// See [`CampaignState`](crate::model::CampaignState)
pub mod campaign_state {
    /// A builder for [`CampaignState`](crate::model::CampaignState)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaign_status: std::option::Option<crate::model::CampaignStatus>,
    }
    impl Builder {
        pub fn campaign_status(mut self, input: crate::model::CampaignStatus) -> Self {
            self.campaign_status = Some(input);
            self
        }
        pub fn set_campaign_status(mut self, input: std::option::Option<crate::model::CampaignStatus>) -> Self {
            self.campaign_status = input;
            self
        }
        /// Consumes the builder and constructs a [`CampaignState`](crate::model::CampaignState)
        pub fn build(self) -> crate::model::CampaignState {
            crate::model::CampaignState {
                campaign_status: self.campaign_status,
            }
        }
    }
}
impl CampaignState {
    /// Creates a new builder-style object to manufacture [`CampaignState`](crate::model::CampaignState)
    pub fn builder() -> crate::model::campaign_state::Builder {
        crate::model::campaign_state::Builder::default()
    }
}

/// Specifies the settings for a campaign treatment. A treatment is a variation of a campaign that's
/// used for A/B testing of a campaign.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct WriteTreatmentResource {
    #[serde(rename = "MessageConfiguration", skip_serializing_if = "Option::is_none")]
    pub message_configuration: std::option::Option<crate::model::MessageConfiguration>,
    #[serde(rename = "Schedule", skip_serializing_if = "Option::is_none")]
    pub schedule: std::option::Option<crate::model::Schedule>,
    #[serde(rename = "SizePercent", skip_serializing_if = "Option::is_none")]
    pub size_percent: std::option::Option<i32>,
    #[serde(rename = "TreatmentDescription", skip_serializing_if = "Option::is_none")]
    pub treatment_description: std::option::Option<std::string::String>,
    #[serde(rename = "TreatmentName", skip_serializing_if = "Option::is_none")]
    pub treatment_name: std::option::Option<std::string::String>,
}
impl WriteTreatmentResource {
    pub fn message_configuration(&self) -> std::option::Option<&crate::model::MessageConfiguration> {
        self.message_configuration.as_ref()
    }
    pub fn schedule(&self) -> std::option::Option<&crate::model::Schedule> {
        self.schedule.as_ref()
    }
    pub fn size_percent(&self) -> std::option::Option<i32> {
        self.size_percent
    }
    pub fn treatment_description(&self) -> std::option::Option<&str> {
        self.treatment_description.as_deref()
    }
    pub fn treatment_name(&self) -> std::option::Option<&str> {
        self.treatment_name.as_deref()
    }
}
/// See [`WriteTreatmentResource`](crate::model::WriteTreatmentResource)
pub mod write_treatment_resource {
    /// A builder for [`WriteTreatmentResource`](crate::model::WriteTreatmentResource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message_configuration: std::option::Option<crate::model::MessageConfiguration>,
        pub(crate) schedule: std::option::Option<crate::model::Schedule>,
        pub(crate) size_percent: std::option::Option<i32>,
        pub(crate) treatment_description: std::option::Option<std::string::String>,
        pub(crate) treatment_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message_configuration(mut self, input: crate::model::MessageConfiguration) -> Self {
            self.message_configuration = Some(input);
            self
        }
        pub fn set_message_configuration(mut self, input: std::option::Option<crate::model::MessageConfiguration>) -> Self {
            self.message_configuration = input;
            self
        }
        pub fn schedule(mut self, input: crate::model::Schedule) -> Self {
            self.schedule = Some(input);
            self
        }
        pub fn set_schedule(mut self, input: std::option::Option<crate::model::Schedule>) -> Self {
            self.schedule = input;
            self
        }
        pub fn size_percent(mut self, input: i32) -> Self {
            self.size_percent = Some(input);
            self
        }
        pub fn set_size_percent(mut self, input: std::option::Option<i32>) -> Self {
            self.size_percent = input;
            self
        }
        pub fn treatment_description(mut self, input: impl Into<std::string::String>) -> Self {
            self.treatment_description = Some(input.into());
            self
        }
        pub fn set_treatment_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.treatment_description = input;
            self
        }
        pub fn treatment_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.treatment_name = Some(input.into());
            self
        }
        pub fn set_treatment_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.treatment_name = input;
            self
        }
        /// Consumes the builder and constructs a [`WriteTreatmentResource`](crate::model::WriteTreatmentResource)
        pub fn build(self) -> crate::model::WriteTreatmentResource {
            crate::model::WriteTreatmentResource {
                message_configuration: self.message_configuration,
                schedule: self.schedule,
                size_percent: self.size_percent,
                treatment_description: self.treatment_description,
                treatment_name: self.treatment_name,
            }
        }
    }
}
impl WriteTreatmentResource {
    /// Creates a new builder-style object to manufacture [`WriteTreatmentResource`](crate::model::WriteTreatmentResource)
    pub fn builder() -> crate::model::write_treatment_resource::Builder {
        crate::model::write_treatment_resource::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct TreatmentResource {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: std::option::Option<std::string::String>,
    #[serde(rename = "MessageConfiguration", skip_serializing_if = "Option::is_none")]
    pub message_configuration: std::option::Option<crate::model::MessageConfiguration>,
    #[serde(rename = "Schedule", skip_serializing_if = "Option::is_none")]
    pub schedule: std::option::Option<crate::model::Schedule>,
    #[serde(rename = "SizePercent", skip_serializing_if = "Option::is_none")]
    pub size_percent: std::option::Option<i32>,
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: std::option::Option<crate::model::CampaignState>,
    #[serde(rename = "TreatmentDescription", skip_serializing_if = "Option::is_none")]
    pub treatment_description: std::option::Option<std::string::String>,
    #[serde(rename = "TreatmentName", skip_serializing_if = "Option::is_none")]
    pub treatment_name: std::option::Option<std::string::String>,
}
impl TreatmentResource {
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    pub fn message_configuration(&self) -> std::option::Option<&crate::model::MessageConfiguration> {
        self.message_configuration.as_ref()
    }
    pub fn schedule(&self) -> std::option::Option<&crate::model::Schedule> {
        self.schedule.as_ref()
    }
    pub fn size_percent(&self) -> std::option::Option<i32> {
        self.size_percent
    }
    pub fn state(&self) -> std::option::Option<&crate::model::CampaignState> {
        self.state.as_ref()
    }
    pub fn treatment_description(&self) -> std::option::Option<&str> {
        self.treatment_description.as_deref()
    }
    pub fn treatment_name(&self) -> std::option::Option<&str> {
        self.treatment_name.as_deref()
    }
}
/// See [`TreatmentResource`](crate::model::TreatmentResource)
pub mod treatment_resource {
    /// A builder for [`TreatmentResource`](crate::model::TreatmentResource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) message_configuration: std::option::Option<crate::model::MessageConfiguration>,
        pub(crate) schedule: std::option::Option<crate::model::Schedule>,
        pub(crate) size_percent: std::option::Option<i32>,
        pub(crate) state: std::option::Option<crate::model::CampaignState>,
        pub(crate) treatment_description: std::option::Option<std::string::String>,
        pub(crate) treatment_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn message_configuration(mut self, input: crate::model::MessageConfiguration) -> Self {
            self.message_configuration = Some(input);
            self
        }
        pub fn set_message_configuration(mut self, input: std::option::Option<crate::model::MessageConfiguration>) -> Self {
            self.message_configuration = input;
            self
        }
        pub fn schedule(mut self, input: crate::model::Schedule) -> Self {
            self.schedule = Some(input);
            self
        }
        pub fn set_schedule(mut self, input: std::option::Option<crate::model::Schedule>) -> Self {
            self.schedule = input;
            self
        }
        pub fn size_percent(mut self, input: i32) -> Self {
            self.size_percent = Some(input);
            self
        }
        pub fn set_size_percent(mut self, input: std::option::Option<i32>) -> Self {
            self.size_percent = input;
            self
        }
        pub fn state(mut self, input: crate::model::CampaignState) -> Self {
            self.state = Some(input);
            self
        }
        pub fn set_state(mut self, input: std::option::Option<crate::model::CampaignState>) -> Self {
            self.state = input;
            self
        }
        pub fn treatment_description(mut self, input: impl Into<std::string::String>) -> Self {
            self.treatment_description = Some(input.into());
            self
        }
        pub fn set_treatment_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.treatment_description = input;
            self
        }
        pub fn treatment_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.treatment_name = Some(input.into());
            self
        }
        pub fn set_treatment_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.treatment_name = input;
            self
        }
        /// Consumes the builder and constructs a [`TreatmentResource`](crate::model::TreatmentResource)
        pub fn build(self) -> crate::model::TreatmentResource {
            crate::model::TreatmentResource {
                id: self.id,
                message_configuration: self.message_configuration,
                schedule: self.schedule,
                size_percent: self.size_percent,
                state: self.state,
                treatment_description: self.treatment_description,
                treatment_name: self.treatment_name,
            }
        }
    }
}
impl TreatmentResource {
    /// Creates a new builder-style object to manufacture [`TreatmentResource`](crate::model::TreatmentResource)
    pub fn builder() -> crate::model::treatment_resource::Builder {
        crate::model::treatment_resource::Builder::default()
    }
}

/// Specifies the message configuration settings for a campaign.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct MessageConfiguration {
    #[serde(rename = "ADMMessage", skip_serializing_if = "Option::is_none")]
    pub adm_message: std::option::Option<crate::model::Message>,
    #[serde(rename = "APNSMessage", skip_serializing_if = "Option::is_none")]
    pub apns_message: std::option::Option<crate::model::Message>,
    #[serde(rename = "BaiduMessage", skip_serializing_if = "Option::is_none")]
    pub baidu_message: std::option::Option<crate::model::Message>,
    /// The default message that the campaign sends through all the channels that are configured for
    /// the campaign.
    #[serde(rename = "DefaultMessage", skip_serializing_if = "Option::is_none")]
    pub default_message: std::option::Option<crate::model::Message>,
    #[serde(rename = "EmailMessage", skip_serializing_if = "Option::is_none")]
    pub email_message: std::option::Option<crate::model::CampaignEmailMessage>,
    #[serde(rename = "GCMMessage", skip_serializing_if = "Option::is_none")]
    pub gcm_message: std::option::Option<crate::model::Message>,
    #[serde(rename = "SMSMessage", skip_serializing_if = "Option::is_none")]
    pub sms_message: std::option::Option<crate::model::CampaignSmsMessage>,
}
impl MessageConfiguration {
    pub fn adm_message(&self) -> std::option::Option<&crate::model::Message> {
        self.adm_message.as_ref()
    }
    pub fn apns_message(&self) -> std::option::Option<&crate::model::Message> {
        self.apns_message.as_ref()
    }
    pub fn baidu_message(&self) -> std::option::Option<&crate::model::Message> {
        self.baidu_message.as_ref()
    }
    pub fn default_message(&self) -> std::option::Option<&crate::model::Message> {
        self.default_message.as_ref()
    }
    pub fn email_message(&self) -> std::option::Option<&crate::model::CampaignEmailMessage> {
        self.email_message.as_ref()
    }
    pub fn gcm_message(&self) -> std::option::Option<&crate::model::Message> {
        self.gcm_message.as_ref()
    }
    pub fn sms_message(&self) -> std::option::Option<&crate::model::CampaignSmsMessage> {
        self.sms_message.as_ref()
    }
}
/// See [`MessageConfiguration`](crate::model::MessageConfiguration)
pub mod message_configuration {
    /// A builder for [`MessageConfiguration`](crate::model::MessageConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) adm_message: std::option::Option<crate::model::Message>,
        pub(crate) apns_message: std::option::Option<crate::model::Message>,
        pub(crate) baidu_message: std::option::Option<crate::model::Message>,
        pub(crate) default_message: std::option::Option<crate::model::Message>,
        pub(crate) email_message: std::option::Option<crate::model::CampaignEmailMessage>,
        pub(crate) gcm_message: std::option::Option<crate::model::Message>,
        pub(crate) sms_message: std::option::Option<crate::model::CampaignSmsMessage>,
    }
    impl Builder {
        pub fn adm_message(mut self, input: crate::model::Message) -> Self {
            self.adm_message = Some(input);
            self
        }
        pub fn set_adm_message(mut self, input: std::option::Option<crate::model::Message>) -> Self {
            self.adm_message = input;
            self
        }
        pub fn apns_message(mut self, input: crate::model::Message) -> Self {
            self.apns_message = Some(input);
            self
        }
        pub fn set_apns_message(mut self, input: std::option::Option<crate::model::Message>) -> Self {
            self.apns_message = input;
            self
        }
        pub fn baidu_message(mut self, input: crate::model::Message) -> Self {
            self.baidu_message = Some(input);
            self
        }
        pub fn set_baidu_message(mut self, input: std::option::Option<crate::model::Message>) -> Self {
            self.baidu_message = input;
            self
        }
        pub fn default_message(mut self, input: crate::model::Message) -> Self {
            self.default_message = Some(input);
            self
        }
        pub fn set_default_message(mut self, input: std::option::Option<crate::model::Message>) -> Self {
            self.default_message = input;
            self
        }
        pub fn email_message(mut self, input: crate::model::CampaignEmailMessage) -> Self {
            self.email_message = Some(input);
            self
        }
        pub fn set_email_message(mut self, input: std::option::Option<crate::model::CampaignEmailMessage>) -> Self {
            self.email_message = input;
            self
        }
        pub fn gcm_message(mut self, input: crate::model::Message) -> Self {
            self.gcm_message = Some(input);
            self
        }
        pub fn set_gcm_message(mut self, input: std::option::Option<crate::model::Message>) -> Self {
            self.gcm_message = input;
            self
        }
        pub fn sms_message(mut self, input: crate::model::CampaignSmsMessage) -> Self {
            self.sms_message = Some(input);
            self
        }
        pub fn set_sms_message(mut self, input: std::option::Option<crate::model::CampaignSmsMessage>) -> Self {
            self.sms_message = input;
            self
        }
        /// Consumes the builder and constructs a [`MessageConfiguration`](crate::model::MessageConfiguration)
        pub fn build(self) -> crate::model::MessageConfiguration {
            crate::model::MessageConfiguration {
                adm_message: self.adm_message,
                apns_message: self.apns_message,
                baidu_message: self.baidu_message,
                default_message: self.default_message,
                email_message: self.email_message,
                gcm_message: self.gcm_message,
                sms_message: self.sms_message,
            }
        }
    }
}
impl MessageConfiguration {
    /// Creates a new builder-style object to manufacture [`MessageConfiguration`](crate::model::MessageConfiguration)
    pub fn builder() -> crate::model::message_configuration::Builder {
        crate::model::message_configuration::Builder::default()
    }
}

/// Specifies the content and settings for a push notification that's sent to recipients of a
/// campaign.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct Message {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub action: std::option::Option<crate::model::Action>,
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub body: std::option::Option<std::string::String>,
    #[serde(rename = "ImageIconUrl", skip_serializing_if = "Option::is_none")]
    pub image_icon_url: std::option::Option<std::string::String>,
    #[serde(rename = "ImageSmallIconUrl", skip_serializing_if = "Option::is_none")]
    pub image_small_icon_url: std::option::Option<std::string::String>,
    #[serde(rename = "ImageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: std::option::Option<std::string::String>,
    #[serde(rename = "JsonBody", skip_serializing_if = "Option::is_none")]
    pub json_body: std::option::Option<std::string::String>,
    #[serde(rename = "MediaUrl", skip_serializing_if = "Option::is_none")]
    pub media_url: std::option::Option<std::string::String>,
    #[serde(rename = "RawContent", skip_serializing_if = "Option::is_none")]
    pub raw_content: std::option::Option<std::string::String>,
    #[serde(rename = "SilentPush", skip_serializing_if = "Option::is_none")]
    pub silent_push: std::option::Option<bool>,
    #[serde(rename = "TimeToLive", skip_serializing_if = "Option::is_none")]
    pub time_to_live: std::option::Option<i32>,
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: std::option::Option<std::string::String>,
    #[serde(rename = "Url", skip_serializing_if = "Option::is_none")]
    pub url: std::option::Option<std::string::String>,
}
impl Message {
    pub fn action(&self) -> std::option::Option<&crate::model::Action> {
        self.action.as_ref()
    }
    pub fn body(&self) -> std::option::Option<&str> {
        self.body.as_deref()
    }
    pub fn image_icon_url(&self) -> std::option::Option<&str> {
        self.image_icon_url.as_deref()
    }
    pub fn image_small_icon_url(&self) -> std::option::Option<&str> {
        self.image_small_icon_url.as_deref()
    }
    pub fn image_url(&self) -> std::option::Option<&str> {
        self.image_url.as_deref()
    }
    pub fn json_body(&self) -> std::option::Option<&str> {
        self.json_body.as_deref()
    }
    pub fn media_url(&self) -> std::option::Option<&str> {
        self.media_url.as_deref()
    }
    pub fn raw_content(&self) -> std::option::Option<&str> {
        self.raw_content.as_deref()
    }
    pub fn silent_push(&self) -> std::option::Option<bool> {
        self.silent_push
    }
    pub fn time_to_live(&self) -> std::option::Option<i32> {
        self.time_to_live
    }
    pub fn title(&self) -> std::option::Option<&str> {
        self.title.as_deref()
    }
    pub fn url(&self) -> std::option::Option<&str> {
        self.url.as_deref()
    }
}
/// See [`Message`](crate::model::Message)
pub mod message {
    /// A builder for [`Message`](crate::model::Message)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) action: std::option::Option<crate::model::Action>,
        pub(crate) body: std::option::Option<std::string::String>,
        pub(crate) image_icon_url: std::option::Option<std::string::String>,
        pub(crate) image_small_icon_url: std::option::Option<std::string::String>,
        pub(crate) image_url: std::option::Option<std::string::String>,
        pub(crate) json_body: std::option::Option<std::string::String>,
        pub(crate) media_url: std::option::Option<std::string::String>,
        pub(crate) raw_content: std::option::Option<std::string::String>,
        pub(crate) silent_push: std::option::Option<bool>,
        pub(crate) time_to_live: std::option::Option<i32>,
        pub(crate) title: std::option::Option<std::string::String>,
        pub(crate) url: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn action(mut self, input: crate::model::Action) -> Self {
            self.action = Some(input);
            self
        }
        pub fn set_action(mut self, input: std::option::Option<crate::model::Action>) -> Self {
            self.action = input;
            self
        }
        pub fn body(mut self, input: impl Into<std::string::String>) -> Self {
            self.body = Some(input.into());
            self
        }
        pub fn set_body(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.body = input;
            self
        }
        pub fn image_icon_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_icon_url = Some(input.into());
            self
        }
        pub fn set_image_icon_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_icon_url = input;
            self
        }
        pub fn image_small_icon_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_small_icon_url = Some(input.into());
            self
        }
        pub fn set_image_small_icon_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_small_icon_url = input;
            self
        }
        pub fn image_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_url = Some(input.into());
            self
        }
        pub fn set_image_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_url = input;
            self
        }
        pub fn json_body(mut self, input: impl Into<std::string::String>) -> Self {
            self.json_body = Some(input.into());
            self
        }
        pub fn set_json_body(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.json_body = input;
            self
        }
        pub fn media_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.media_url = Some(input.into());
            self
        }
        pub fn set_media_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.media_url = input;
            self
        }
        pub fn raw_content(mut self, input: impl Into<std::string::String>) -> Self {
            self.raw_content = Some(input.into());
            self
        }
        pub fn set_raw_content(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.raw_content = input;
            self
        }
        pub fn silent_push(mut self, input: bool) -> Self {
            self.silent_push = Some(input);
            self
        }
        pub fn set_silent_push(mut self, input: std::option::Option<bool>) -> Self {
            self.silent_push = input;
            self
        }
        pub fn time_to_live(mut self, input: i32) -> Self {
            self.time_to_live = Some(input);
            self
        }
        pub fn set_time_to_live(mut self, input: std::option::Option<i32>) -> Self {
            self.time_to_live = input;
            self
        }
        pub fn title(mut self, input: impl Into<std::string::String>) -> Self {
            self.title = Some(input.into());
            self
        }
        pub fn set_title(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.title = input;
            self
        }
        pub fn url(mut self, input: impl Into<std::string::String>) -> Self {
            self.url = Some(input.into());
            self
        }
        pub fn set_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.url = input;
            self
        }
        /// Consumes the builder and constructs a [`Message`](crate::model::Message)
        pub fn build(self) -> crate::model::Message {
            crate::model::Message {
                action: self.action,
                body: self.body,
                image_icon_url: self.image_icon_url,
                image_small_icon_url: self.image_small_icon_url,
                image_url: self.image_url,
                json_body: self.json_body,
                media_url: self.media_url,
                raw_content: self.raw_content,
                silent_push: self.silent_push,
                time_to_live: self.time_to_live,
                title: self.title,
                url: self.url,
            }
        }
    }
}
impl Message {
    /// Creates a new builder-style object to manufacture [`Message`](crate::model::Message)
    pub fn builder() -> crate::model::message::Builder {
        crate::model::message::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct CampaignEmailMessage {
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub body: std::option::Option<std::string::String>,
    #[serde(rename = "FromAddress", skip_serializing_if = "Option::is_none")]
    pub from_address: std::option::Option<std::string::String>,
    #[serde(rename = "HtmlBody", skip_serializing_if = "Option::is_none")]
    pub html_body: std::option::Option<std::string::String>,
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: std::option::Option<std::string::String>,
}
impl CampaignEmailMessage {
    pub fn body(&self) -> std::option::Option<&str> {
        self.body.as_deref()
    }
    pub fn from_address(&self) -> std::option::Option<&str> {
        self.from_address.as_deref()
    }
    pub fn html_body(&self) -> std::option::Option<&str> {
        self.html_body.as_deref()
    }
    pub fn title(&self) -> std::option::Option<&str> {
        self.title.as_deref()
    }
}
/// See [`CampaignEmailMessage`](crate::model::CampaignEmailMessage)
pub mod campaign_email_message {
    /// A builder for [`CampaignEmailMessage`](crate::model::CampaignEmailMessage)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) body: std::option::Option<std::string::String>,
        pub(crate) from_address: std::option::Option<std::string::String>,
        pub(crate) html_body: std::option::Option<std::string::String>,
        pub(crate) title: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn body(mut self, input: impl Into<std::string::String>) -> Self {
            self.body = Some(input.into());
            self
        }
        pub fn set_body(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.body = input;
            self
        }
        pub fn from_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.from_address = Some(input.into());
            self
        }
        pub fn set_from_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.from_address = input;
            self
        }
        pub fn html_body(mut self, input: impl Into<std::string::String>) -> Self {
            self.html_body = Some(input.into());
            self
        }
        pub fn set_html_body(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.html_body = input;
            self
        }
        pub fn title(mut self, input: impl Into<std::string::String>) -> Self {
            self.title = Some(input.into());
            self
        }
        pub fn set_title(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.title = input;
            self
        }
        /// Consumes the builder and constructs a [`CampaignEmailMessage`](crate::model::CampaignEmailMessage)
        pub fn build(self) -> crate::model::CampaignEmailMessage {
            crate::model::CampaignEmailMessage {
                body: self.body,
                from_address: self.from_address,
                html_body: self.html_body,
                title: self.title,
            }
        }
    }
}
impl CampaignEmailMessage {
    /// Creates a new builder-style object to manufacture [`CampaignEmailMessage`](crate::model::CampaignEmailMessage)
    pub fn builder() -> crate::model::campaign_email_message::Builder {
        crate::model::campaign_email_message::Builder::default()
    }
}

/// Specifies the content and settings for an SMS message that's sent to recipients of a campaign.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct CampaignSmsMessage {
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub body: std::option::Option<std::string::String>,
    #[serde(rename = "MessageType", skip_serializing_if = "Option::is_none")]
    pub message_type: std::option::Option<crate::model::MessageType>,
    #[serde(rename = "OriginationNumber", skip_serializing_if = "Option::is_none")]
    pub origination_number: std::option::Option<std::string::String>,
    #[serde(rename = "SenderId", skip_serializing_if = "Option::is_none")]
    pub sender_id: std::option::Option<std::string::String>,
}
impl CampaignSmsMessage {
    pub fn body(&self) -> std::option::Option<&str> {
        self.body.as_deref()
    }
    pub fn message_type(&self) -> std::option::Option<&crate::model::MessageType> {
        self.message_type.as_ref()
    }
    pub fn origination_number(&self) -> std::option::Option<&str> {
        self.origination_number.as_deref()
    }
    pub fn sender_id(&self) -> std::option::Option<&str> {
        self.sender_id.as_deref()
    }
}
/// See [`CampaignSmsMessage`](crate::model::CampaignSmsMessage)
pub mod campaign_sms_message {
    /// A builder for [`CampaignSmsMessage`](crate::model::CampaignSmsMessage)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) body: std::option::Option<std::string::String>,
        pub(crate) message_type: std::option::Option<crate::model::MessageType>,
        pub(crate) origination_number: std::option::Option<std::string::String>,
        pub(crate) sender_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn body(mut self, input: impl Into<std::string::String>) -> Self {
            self.body = Some(input.into());
            self
        }
        pub fn set_body(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.body = input;
            self
        }
        pub fn message_type(mut self, input: crate::model::MessageType) -> Self {
            self.message_type = Some(input);
            self
        }
        pub fn set_message_type(mut self, input: std::option::Option<crate::model::MessageType>) -> Self {
            self.message_type = input;
            self
        }
        pub fn origination_number(mut self, input: impl Into<std::string::String>) -> Self {
            self.origination_number = Some(input.into());
            self
        }
        pub fn set_origination_number(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.origination_number = input;
            self
        }
        pub fn sender_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.sender_id = Some(input.into());
            self
        }
        pub fn set_sender_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.sender_id = input;
            self
        }
        /// Consumes the builder and constructs a [`CampaignSmsMessage`](crate::model::CampaignSmsMessage)
        pub fn build(self) -> crate::model::CampaignSmsMessage {
            crate::model::CampaignSmsMessage {
                body: self.body,
                message_type: self.message_type,
                origination_number: self.origination_number,
                sender_id: self.sender_id,
            }
        }
    }
}
impl CampaignSmsMessage {
    /// Creates a new builder-style object to manufacture [`CampaignSmsMessage`](crate::model::CampaignSmsMessage)
    pub fn builder() -> crate::model::campaign_sms_message::Builder {
        crate::model::campaign_sms_message::Builder::default()
    }
}

/// Specifies the schedule settings for a campaign.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct Schedule {
    #[serde(rename = "EndTime", skip_serializing_if = "Option::is_none")]
    pub end_time: std::option::Option<std::string::String>,
    #[serde(rename = "Frequency", skip_serializing_if = "Option::is_none")]
    pub frequency: std::option::Option<crate::model::Frequency>,
    #[serde(rename = "IsLocalTime", skip_serializing_if = "Option::is_none")]
    pub is_local_time: std::option::Option<bool>,
    #[serde(rename = "QuietTime", skip_serializing_if = "Option::is_none")]
    pub quiet_time: std::option::Option<crate::model::QuietTime>,
    /// The scheduled time when the campaign began or will begin. Valid values are: `IMMEDIATE`, to
    /// start the campaign immediately; or, a specific time in ISO 8601 format.
    #[serde(rename = "StartTime", skip_serializing_if = "Option::is_none")]
    pub start_time: std::option::Option<std::string::String>,
    #[serde(rename = "Timezone", skip_serializing_if = "Option::is_none")]
    pub timezone: std::option::Option<std::string::String>,
}
impl Schedule {
    pub fn end_time(&self) -> std::option::Option<&str> {
        self.end_time.as_deref()
    }
    pub fn frequency(&self) -> std::option::Option<&crate::model::Frequency> {
        self.frequency.as_ref()
    }
    pub fn is_local_time(&self) -> std::option::Option<bool> {
        self.is_local_time
    }
    pub fn quiet_time(&self) -> std::option::Option<&crate::model::QuietTime> {
        self.quiet_time.as_ref()
    }
    pub fn start_time(&self) -> std::option::Option<&str> {
        self.start_time.as_deref()
    }
    pub fn timezone(&self) -> std::option::Option<&str> {
        self.timezone.as_deref()
    }
}
/// See [`Schedule`](crate::model::Schedule)
pub mod schedule {
    /// A builder for [`Schedule`](crate::model::Schedule)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) end_time: std::option::Option<std::string::String>,
        pub(crate) frequency: std::option::Option<crate::model::Frequency>,
        pub(crate) is_local_time: std::option::Option<bool>,
        pub(crate) quiet_time: std::option::Option<crate::model::QuietTime>,
        pub(crate) start_time: std::option::Option<std::string::String>,
        pub(crate) timezone: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn end_time(mut self, input: impl Into<std::string::String>) -> Self {
            self.end_time = Some(input.into());
            self
        }
        pub fn set_end_time(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.end_time = input;
            self
        }
        pub fn frequency(mut self, input: crate::model::Frequency) -> Self {
            self.frequency = Some(input);
            self
        }
        pub fn set_frequency(mut self, input: std::option::Option<crate::model::Frequency>) -> Self {
            self.frequency = input;
            self
        }
        pub fn is_local_time(mut self, input: bool) -> Self {
            self.is_local_time = Some(input);
            self
        }
        pub fn set_is_local_time(mut self, input: std::option::Option<bool>) -> Self {
            self.is_local_time = input;
            self
        }
        pub fn quiet_time(mut self, input: crate::model::QuietTime) -> Self {
            self.quiet_time = Some(input);
            self
        }
        pub fn set_quiet_time(mut self, input: std::option::Option<crate::model::QuietTime>) -> Self {
            self.quiet_time = input;
            self
        }
        pub fn start_time(mut self, input: impl Into<std::string::String>) -> Self {
            self.start_time = Some(input.into());
            self
        }
        pub fn set_start_time(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.start_time = input;
            self
        }
        pub fn timezone(mut self, input: impl Into<std::string::String>) -> Self {
            self.timezone = Some(input.into());
            self
        }
        pub fn set_timezone(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.timezone = input;
            self
        }
        /// Consumes the builder and constructs a [`Schedule`](crate::model::Schedule)
        pub fn build(self) -> crate::model::Schedule {
            crate::model::Schedule {
                end_time: self.end_time,
                frequency: self.frequency,
                is_local_time: self.is_local_time,
                quiet_time: self.quiet_time,
                start_time: self.start_time,
                timezone: self.timezone,
            }
        }
    }
}
impl Schedule {
    /// Creates a new builder-style object to manufacture [`Schedule`](crate::model::Schedule)
    pub fn builder() -> crate::model::schedule::Builder {
        crate::model::schedule::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct ActivitiesResponse {
    #[serde(rename = "Item", skip_serializing_if = "Option::is_none")]
    pub item: std::option::Option<std::vec::Vec<crate::model::ActivityResponse>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl ActivitiesResponse {
    pub fn item(&self) -> std::option::Option<&[crate::model::ActivityResponse]> {
        self.item.as_deref()
    }
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
/// See [`ActivitiesResponse`](crate::model::ActivitiesResponse)
pub mod activities_response {
    /// A builder for [`ActivitiesResponse`](crate::model::ActivitiesResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) item: std::option::Option<std::vec::Vec<crate::model::ActivityResponse>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `item`.
        ///
        /// To override the contents of this collection use [`set_item`](Self::set_item).
        pub fn item(mut self, input: impl Into<crate::model::ActivityResponse>) -> Self {
            let mut v = self.item.unwrap_or_default();
            v.push(input.into());
            self.item = Some(v);
            self
        }
        pub fn set_item(mut self, input: std::option::Option<std::vec::Vec<crate::model::ActivityResponse>>) -> Self {
            self.item = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ActivitiesResponse`](crate::model::ActivitiesResponse)
        pub fn build(self) -> crate::model::ActivitiesResponse {
            crate::model::ActivitiesResponse {
                item: self.item,
                next_token: self.next_token,
            }
        }
    }
}
impl ActivitiesResponse {
    /// Creates a new builder-style object to manufacture [`ActivitiesResponse`](crate::model::ActivitiesResponse)
    pub fn builder() -> crate::model::activities_response::Builder {
        crate::model::activities_response::Builder::default()
    }
}

/// Provides information about an activity that was performed by a campaign.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct ActivityResponse {
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub application_id: std::option::Option<std::string::String>,
    #[serde(rename = "CampaignId", skip_serializing_if = "Option::is_none")]
    pub campaign_id: std::option::Option<std::string::String>,
    #[serde(rename = "End", skip_serializing_if = "Option::is_none")]
    pub end: std::option::Option<std::string::String>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: std::option::Option<std::string::String>,
    #[serde(rename = "Result", skip_serializing_if = "Option::is_none")]
    pub result: std::option::Option<std::string::String>,
    #[serde(rename = "ScheduledStart", skip_serializing_if = "Option::is_none")]
    pub scheduled_start: std::option::Option<std::string::String>,
    #[serde(rename = "Start", skip_serializing_if = "Option::is_none")]
    pub start: std::option::Option<std::string::String>,
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: std::option::Option<std::string::String>,
    #[serde(rename = "SuccessfulEndpointCount", skip_serializing_if = "Option::is_none")]
    pub successful_endpoint_count: std::option::Option<i32>,
    #[serde(rename = "TimezonesCompletedCount", skip_serializing_if = "Option::is_none")]
    pub timezones_completed_count: std::option::Option<i32>,
    #[serde(rename = "TimezonesTotalCount", skip_serializing_if = "Option::is_none")]
    pub timezones_total_count: std::option::Option<i32>,
    #[serde(rename = "TotalEndpointCount", skip_serializing_if = "Option::is_none")]
    pub total_endpoint_count: std::option::Option<i32>,
    #[serde(rename = "TreatmentId", skip_serializing_if = "Option::is_none")]
    pub treatment_id: std::option::Option<std::string::String>,
}
impl ActivityResponse {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn campaign_id(&self) -> std::option::Option<&str> {
        self.campaign_id.as_deref()
    }
    pub fn end(&self) -> std::option::Option<&str> {
        self.end.as_deref()
    }
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    pub fn result(&self) -> std::option::Option<&str> {
        self.result.as_deref()
    }
    pub fn scheduled_start(&self) -> std::option::Option<&str> {
        self.scheduled_start.as_deref()
    }
    pub fn start(&self) -> std::option::Option<&str> {
        self.start.as_deref()
    }
    pub fn state(&self) -> std::option::Option<&str> {
        self.state.as_deref()
    }
    pub fn successful_endpoint_count(&self) -> std::option::Option<i32> {
        self.successful_endpoint_count
    }
    pub fn timezones_completed_count(&self) -> std::option::Option<i32> {
        self.timezones_completed_count
    }
    pub fn timezones_total_count(&self) -> std::option::Option<i32> {
        self.timezones_total_count
    }
    pub fn total_endpoint_count(&self) -> std::option::Option<i32> {
        self.total_endpoint_count
    }
    pub fn treatment_id(&self) -> std::option::Option<&str> {
        self.treatment_id.as_deref()
    }
}
/// See [`ActivityResponse`](crate::model::ActivityResponse)
pub mod activity_response {
    /// A builder for [`ActivityResponse`](crate::model::ActivityResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) campaign_id: std::option::Option<std::string::String>,
        pub(crate) end: std::option::Option<std::string::String>,
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) result: std::option::Option<std::string::String>,
        pub(crate) scheduled_start: std::option::Option<std::string::String>,
        pub(crate) start: std::option::Option<std::string::String>,
        pub(crate) state: std::option::Option<std::string::String>,
        pub(crate) successful_endpoint_count: std::option::Option<i32>,
        pub(crate) timezones_completed_count: std::option::Option<i32>,
        pub(crate) timezones_total_count: std::option::Option<i32>,
        pub(crate) total_endpoint_count: std::option::Option<i32>,
        pub(crate) treatment_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn campaign_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.campaign_id = Some(input.into());
            self
        }
        pub fn set_campaign_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.campaign_id = input;
            self
        }
        pub fn end(mut self, input: impl Into<std::string::String>) -> Self {
            self.end = Some(input.into());
            self
        }
        pub fn set_end(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.end = input;
            self
        }
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn result(mut self, input: impl Into<std::string::String>) -> Self {
            self.result = Some(input.into());
            self
        }
        pub fn set_result(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.result = input;
            self
        }
        pub fn scheduled_start(mut self, input: impl Into<std::string::String>) -> Self {
            self.scheduled_start = Some(input.into());
            self
        }
        pub fn set_scheduled_start(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.scheduled_start = input;
            self
        }
        pub fn start(mut self, input: impl Into<std::string::String>) -> Self {
            self.start = Some(input.into());
            self
        }
        pub fn set_start(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.start = input;
            self
        }
        pub fn state(mut self, input: impl Into<std::string::String>) -> Self {
            self.state = Some(input.into());
            self
        }
        pub fn set_state(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.state = input;
            self
        }
        pub fn successful_endpoint_count(mut self, input: i32) -> Self {
            self.successful_endpoint_count = Some(input);
            self
        }
        pub fn set_successful_endpoint_count(mut self, input: std::option::Option<i32>) -> Self {
            self.successful_endpoint_count = input;
            self
        }
        pub fn timezones_completed_count(mut self, input: i32) -> Self {
            self.timezones_completed_count = Some(input);
            self
        }
        pub fn set_timezones_completed_count(mut self, input: std::option::Option<i32>) -> Self {
            self.timezones_completed_count = input;
            self
        }
        pub fn timezones_total_count(mut self, input: i32) -> Self {
            self.timezones_total_count = Some(input);
            self
        }
        pub fn set_timezones_total_count(mut self, input: std::option::Option<i32>) -> Self {
            self.timezones_total_count = input;
            self
        }
        pub fn total_endpoint_count(mut self, input: i32) -> Self {
            self.total_endpoint_count = Some(input);
            self
        }
        pub fn set_total_endpoint_count(mut self, input: std::option::Option<i32>) -> Self {
            self.total_endpoint_count = input;
            self
        }
        pub fn treatment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.treatment_id = Some(input.into());
            self
        }
        pub fn set_treatment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.treatment_id = input;
            self
        }
        /// Consumes the builder and constructs a [`ActivityResponse`](crate::model::ActivityResponse)
        pub fn build(self) -> crate::model::ActivityResponse {
            crate::model::ActivityResponse {
                application_id: self.application_id,
                campaign_id: self.campaign_id,
                end: self.end,
                id: self.id,
                result: self.result,
                scheduled_start: self.scheduled_start,
                start: self.start,
                state: self.state,
                successful_endpoint_count: self.successful_endpoint_count,
                timezones_completed_count: self.timezones_completed_count,
                timezones_total_count: self.timezones_total_count,
                total_endpoint_count: self.total_endpoint_count,
                treatment_id: self.treatment_id,
            }
        }
    }
}
impl ActivityResponse {
    /// Creates a new builder-style object to manufacture [`ActivityResponse`](crate::model::ActivityResponse)
    pub fn builder() -> crate::model::activity_response::Builder {
        crate::model::activity_response::Builder::default()
    }
}

/// Specifies the channel type and other settings for an endpoint.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct EndpointRequest {
    /// The destination address for messages or push notifications that you send to the endpoint.
    /// The address varies by channel.
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    pub address: std::option::Option<std::string::String>,
    #[serde(rename = "Attributes", skip_serializing_if = "Option::is_none")]
    pub attributes: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
    #[serde(rename = "ChannelType", skip_serializing_if = "Option::is_none")]
    pub channel_type: std::option::Option<crate::model::ChannelType>,
    #[serde(rename = "Demographic", skip_serializing_if = "Option::is_none")]
    pub demographic: std::option::Option<crate::model::EndpointDemographic>,
    #[serde(rename = "EffectiveDate", skip_serializing_if = "Option::is_none")]
    pub effective_date: std::option::Option<std::string::String>,
    #[serde(rename = "EndpointStatus", skip_serializing_if = "Option::is_none")]
    pub endpoint_status: std::option::Option<std::string::String>,
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub location: std::option::Option<crate::model::EndpointLocation>,
    #[serde(rename = "Metrics", skip_serializing_if = "Option::is_none")]
    pub metrics: std::option::Option<std::collections::HashMap<std::string::String, f64>>,
    /// Specifies whether the user who's associated with the endpoint has opted out of receiving
    /// messages and push notifications from you. Possible values are: `ALL` and `NONE`.
    #[serde(rename = "OptOut", skip_serializing_if = "Option::is_none")]
    pub opt_out: std::option::Option<std::string::String>,
    #[serde(rename = "RequestId", skip_serializing_if = "Option::is_none")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "User", skip_serializing_if = "Option::is_none")]
    pub user: std::option::Option<crate::model::EndpointUser>,
}
impl EndpointRequest {
    pub fn address(&self) -> std::option::Option<&str> {
        self.address.as_deref()
    }
    pub fn attributes(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>> {
        self.attributes.as_ref()
    }
    pub fn channel_type(&self) -> std::option::Option<&crate::model::ChannelType> {
        self.channel_type.as_ref()
    }
    pub fn demographic(&self) -> std::option::Option<&crate::model::EndpointDemographic> {
        self.demographic.as_ref()
    }
    pub fn effective_date(&self) -> std::option::Option<&str> {
        self.effective_date.as_deref()
    }
    pub fn endpoint_status(&self) -> std::option::Option<&str> {
        self.endpoint_status.as_deref()
    }
    pub fn location(&self) -> std::option::Option<&crate::model::EndpointLocation> {
        self.location.as_ref()
    }
    pub fn metrics(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, f64>> {
        self.metrics.as_ref()
    }
    pub fn opt_out(&self) -> std::option::Option<&str> {
        self.opt_out.as_deref()
    }
    pub fn request_id(&self) -> std::option::Option<&str> {
        self.request_id.as_deref()
    }
    pub fn user(&self) -> std::option::Option<&crate::model::EndpointUser> {
        self.user.as_ref()
    }
}
/// See [`EndpointRequest`](crate::model::EndpointRequest)
pub mod endpoint_request {
    /// A builder for [`EndpointRequest`](crate::model::EndpointRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) address: std::option::Option<std::string::String>,
        pub(crate) attributes: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
        pub(crate) channel_type: std::option::Option<crate::model::ChannelType>,
        pub(crate) demographic: std::option::Option<crate::model::EndpointDemographic>,
        pub(crate) effective_date: std::option::Option<std::string::String>,
        pub(crate) endpoint_status: std::option::Option<std::string::String>,
        pub(crate) location: std::option::Option<crate::model::EndpointLocation>,
        pub(crate) metrics: std::option::Option<std::collections::HashMap<std::string::String, f64>>,
        pub(crate) opt_out: std::option::Option<std::string::String>,
        pub(crate) request_id: std::option::Option<std::string::String>,
        pub(crate) user: std::option::Option<crate::model::EndpointUser>,
    }
    impl Builder {
        pub fn address(mut self, input: impl Into<std::string::String>) -> Self {
            self.address = Some(input.into());
            self
        }
        pub fn set_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.address = input;
            self
        }
        /// Adds a key-value pair to `attributes`.
        ///
        /// To override the contents of this collection use [`set_attributes`](Self::set_attributes).
        pub fn attributes(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<std::string::String>>,
        ) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.attributes = Some(hash_map);
            self
        }
        pub fn set_attributes(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>) -> Self {
            self.attributes = input;
            self
        }
        pub fn channel_type(mut self, input: crate::model::ChannelType) -> Self {
            self.channel_type = Some(input);
            self
        }
        pub fn set_channel_type(mut self, input: std::option::Option<crate::model::ChannelType>) -> Self {
            self.channel_type = input;
            self
        }
        pub fn demographic(mut self, input: crate::model::EndpointDemographic) -> Self {
            self.demographic = Some(input);
            self
        }
        pub fn set_demographic(mut self, input: std::option::Option<crate::model::EndpointDemographic>) -> Self {
            self.demographic = input;
            self
        }
        pub fn effective_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.effective_date = Some(input.into());
            self
        }
        pub fn set_effective_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.effective_date = input;
            self
        }
        pub fn endpoint_status(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_status = Some(input.into());
            self
        }
        pub fn set_endpoint_status(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_status = input;
            self
        }
        pub fn location(mut self, input: crate::model::EndpointLocation) -> Self {
            self.location = Some(input);
            self
        }
        pub fn set_location(mut self, input: std::option::Option<crate::model::EndpointLocation>) -> Self {
            self.location = input;
            self
        }
        /// Adds a key-value pair to `metrics`.
        ///
        /// To override the contents of this collection use [`set_metrics`](Self::set_metrics).
        pub fn metrics(
            mut self,
            k: impl Into<std::string::String>,
            v: f64,
        ) -> Self {
            let mut hash_map = self.metrics.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.metrics = Some(hash_map);
            self
        }
        pub fn set_metrics(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, f64>>) -> Self {
            self.metrics = input;
            self
        }
        pub fn opt_out(mut self, input: impl Into<std::string::String>) -> Self {
            self.opt_out = Some(input.into());
            self
        }
        pub fn set_opt_out(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.opt_out = input;
            self
        }
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn user(mut self, input: crate::model::EndpointUser) -> Self {
            self.user = Some(input);
            self
        }
        pub fn set_user(mut self, input: std::option::Option<crate::model::EndpointUser>) -> Self {
            self.user = input;
            self
        }
        /// Consumes the builder and constructs a [`EndpointRequest`](crate::model::EndpointRequest)
        pub fn build(self) -> crate::model::EndpointRequest {
            crate::model::EndpointRequest {
                address: self.address,
                attributes: self.attributes,
                channel_type: self.channel_type,
                demographic: self.demographic,
                effective_date: self.effective_date,
                endpoint_status: self.endpoint_status,
                location: self.location,
                metrics: self.metrics,
                opt_out: self.opt_out,
                request_id: self.request_id,
                user: self.user,
            }
        }
    }
}
impl EndpointRequest {
    /// Creates a new builder-style object to manufacture [`EndpointRequest`](crate::model::EndpointRequest)
    pub fn builder() -> crate::model::endpoint_request::Builder {
        crate::model::endpoint_request::Builder::default()
    }
}

/// Provides information about the channel type and other settings for an endpoint.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct EndpointResponse {
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    pub address: std::option::Option<std::string::String>,
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub application_id: std::option::Option<std::string::String>,
    #[serde(rename = "Attributes", skip_serializing_if = "Option::is_none")]
    pub attributes: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
    #[serde(rename = "ChannelType", skip_serializing_if = "Option::is_none")]
    pub channel_type: std::option::Option<crate::model::ChannelType>,
    #[serde(rename = "CohortId", skip_serializing_if = "Option::is_none")]
    pub cohort_id: std::option::Option<std::string::String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub creation_date: std::option::Option<std::string::String>,
    #[serde(rename = "Demographic", skip_serializing_if = "Option::is_none")]
    pub demographic: std::option::Option<crate::model::EndpointDemographic>,
    #[serde(rename = "EffectiveDate", skip_serializing_if = "Option::is_none")]
    pub effective_date: std::option::Option<std::string::String>,
    #[serde(rename = "EndpointStatus", skip_serializing_if = "Option::is_none")]
    pub endpoint_status: std::option::Option<std::string::String>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: std::option::Option<std::string::String>,
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub location: std::option::Option<crate::model::EndpointLocation>,
    #[serde(rename = "Metrics", skip_serializing_if = "Option::is_none")]
    pub metrics: std::option::Option<std::collections::HashMap<std::string::String, f64>>,
    #[serde(rename = "OptOut", skip_serializing_if = "Option::is_none")]
    pub opt_out: std::option::Option<std::string::String>,
    #[serde(rename = "RequestId", skip_serializing_if = "Option::is_none")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "User", skip_serializing_if = "Option::is_none")]
    pub user: std::option::Option<crate::model::EndpointUser>,
}
impl EndpointResponse {
    pub fn address(&self) -> std::option::Option<&str> {
        self.address.as_deref()
    }
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn attributes(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>> {
        self.attributes.as_ref()
    }
    pub fn channel_type(&self) -> std::option::Option<&crate::model::ChannelType> {
        self.channel_type.as_ref()
    }
    pub fn cohort_id(&self) -> std::option::Option<&str> {
        self.cohort_id.as_deref()
    }
    pub fn creation_date(&self) -> std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    pub fn demographic(&self) -> std::option::Option<&crate::model::EndpointDemographic> {
        self.demographic.as_ref()
    }
    pub fn effective_date(&self) -> std::option::Option<&str> {
        self.effective_date.as_deref()
    }
    pub fn endpoint_status(&self) -> std::option::Option<&str> {
        self.endpoint_status.as_deref()
    }
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    pub fn location(&self) -> std::option::Option<&crate::model::EndpointLocation> {
        self.location.as_ref()
    }
    pub fn metrics(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, f64>> {
        self.metrics.as_ref()
    }
    pub fn opt_out(&self) -> std::option::Option<&str> {
        self.opt_out.as_deref()
    }
    pub fn request_id(&self) -> std::option::Option<&str> {
        self.request_id.as_deref()
    }
    pub fn user(&self) -> std::option::Option<&crate::model::EndpointUser> {
        self.user.as_ref()
    }
}
/// See [`EndpointResponse`](crate::model::EndpointResponse)
pub mod endpoint_response {
    /// A builder for [`EndpointResponse`](crate::model::EndpointResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) address: std::option::Option<std::string::String>,
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) attributes: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
        pub(crate) channel_type: std::option::Option<crate::model::ChannelType>,
        pub(crate) cohort_id: std::option::Option<std::string::String>,
        pub(crate) creation_date: std::option::Option<std::string::String>,
        pub(crate) demographic: std::option::Option<crate::model::EndpointDemographic>,
        pub(crate) effective_date: std::option::Option<std::string::String>,
        pub(crate) endpoint_status: std::option::Option<std::string::String>,
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) location: std::option::Option<crate::model::EndpointLocation>,
        pub(crate) metrics: std::option::Option<std::collections::HashMap<std::string::String, f64>>,
        pub(crate) opt_out: std::option::Option<std::string::String>,
        pub(crate) request_id: std::option::Option<std::string::String>,
        pub(crate) user: std::option::Option<crate::model::EndpointUser>,
    }
    impl Builder {
        pub fn address(mut self, input: impl Into<std::string::String>) -> Self {
            self.address = Some(input.into());
            self
        }
        pub fn set_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.address = input;
            self
        }
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// Adds a key-value pair to `attributes`.
        ///
        /// To override the contents of this collection use [`set_attributes`](Self::set_attributes).
        pub fn attributes(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<std::string::String>>,
        ) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.attributes = Some(hash_map);
            self
        }
        pub fn set_attributes(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>) -> Self {
            self.attributes = input;
            self
        }
        pub fn channel_type(mut self, input: crate::model::ChannelType) -> Self {
            self.channel_type = Some(input);
            self
        }
        pub fn set_channel_type(mut self, input: std::option::Option<crate::model::ChannelType>) -> Self {
            self.channel_type = input;
            self
        }
        pub fn cohort_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cohort_id = Some(input.into());
            self
        }
        pub fn set_cohort_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cohort_id = input;
            self
        }
        pub fn creation_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.creation_date = Some(input.into());
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creation_date = input;
            self
        }
        pub fn demographic(mut self, input: crate::model::EndpointDemographic) -> Self {
            self.demographic = Some(input);
            self
        }
        pub fn set_demographic(mut self, input: std::option::Option<crate::model::EndpointDemographic>) -> Self {
            self.demographic = input;
            self
        }
        pub fn effective_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.effective_date = Some(input.into());
            self
        }
        pub fn set_effective_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.effective_date = input;
            self
        }
        pub fn endpoint_status(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_status = Some(input.into());
            self
        }
        pub fn set_endpoint_status(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_status = input;
            self
        }
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn location(mut self, input: crate::model::EndpointLocation) -> Self {
            self.location = Some(input);
            self
        }
        pub fn set_location(mut self, input: std::option::Option<crate::model::EndpointLocation>) -> Self {
            self.location = input;
            self
        }
        /// Adds a key-value pair to `metrics`.
        ///
        /// To override the contents of this collection use [`set_metrics`](Self::set_metrics).
        pub fn metrics(
            mut self,
            k: impl Into<std::string::String>,
            v: f64,
        ) -> Self {
            let mut hash_map = self.metrics.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.metrics = Some(hash_map);
            self
        }
        pub fn set_metrics(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, f64>>) -> Self {
            self.metrics = input;
            self
        }
        pub fn opt_out(mut self, input: impl Into<std::string::String>) -> Self {
            self.opt_out = Some(input.into());
            self
        }
        pub fn set_opt_out(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.opt_out = input;
            self
        }
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn user(mut self, input: crate::model::EndpointUser) -> Self {
            self.user = Some(input);
            self
        }
        pub fn set_user(mut self, input: std::option::Option<crate::model::EndpointUser>) -> Self {
            self.user = input;
            self
        }
        /// Consumes the builder and constructs a [`EndpointResponse`](crate::model::EndpointResponse)
        pub fn build(self) -> crate::model::EndpointResponse {
            crate::model::EndpointResponse {
                address: self.address,
                application_id: self.application_id,
                attributes: self.attributes,
                channel_type: self.channel_type,
                cohort_id: self.cohort_id,
                creation_date: self.creation_date,
                demographic: self.demographic,
                effective_date: self.effective_date,
                endpoint_status: self.endpoint_status,
                id: self.id,
                location: self.location,
                metrics: self.metrics,
                opt_out: self.opt_out,
                request_id: self.request_id,
                user: self.user,
            }
        }
    }
}
impl EndpointResponse {
    /// Creates a new builder-style object to manufacture [`EndpointResponse`](crate::model::EndpointResponse)
    pub fn builder() -> crate::model::endpoint_response::Builder {
        crate::model::endpoint_response::Builder::default()
    }
}

/// Specifies a batch of endpoints to create or update and the settings and attributes to set or
/// change for each endpoint.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct EndpointBatchRequest {
    #[serde(rename = "Item", skip_serializing_if = "Option::is_none")]
    pub item: std::option::Option<std::vec::Vec<crate::model::EndpointBatchItem>>,
}
impl EndpointBatchRequest {
    pub fn item(&self) -> std::option::Option<&[crate::model::EndpointBatchItem]> {
        self.item.as_deref()
    }
}
/// See [`EndpointBatchRequest`](crate::model::EndpointBatchRequest)
pub mod endpoint_batch_request {
    /// A builder for [`EndpointBatchRequest`](crate::model::EndpointBatchRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) item: std::option::Option<std::vec::Vec<crate::model::EndpointBatchItem>>,
    }
    impl Builder {
        /// Appends an item to `item`.
        ///
        /// To override the contents of this collection use [`set_item`](Self::set_item).
        pub fn item(mut self, input: impl Into<crate::model::EndpointBatchItem>) -> Self {
            let mut v = self.item.unwrap_or_default();
            v.push(input.into());
            self.item = Some(v);
            self
        }
        pub fn set_item(mut self, input: std::option::Option<std::vec::Vec<crate::model::EndpointBatchItem>>) -> Self {
            self.item = input;
            self
        }
        /// Consumes the builder and constructs a [`EndpointBatchRequest`](crate::model::EndpointBatchRequest)
        pub fn build(self) -> crate::model::EndpointBatchRequest {
            crate::model::EndpointBatchRequest {
                item: self.item,
            }
        }
    }
}
impl EndpointBatchRequest {
    /// Creates a new builder-style object to manufacture [`EndpointBatchRequest`](crate::model::EndpointBatchRequest)
    pub fn builder() -> crate::model::endpoint_batch_request::Builder {
        crate::model::endpoint_batch_request::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct EndpointBatchItem {
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    pub address: std::option::Option<std::string::String>,
    #[serde(rename = "Attributes", skip_serializing_if = "Option::is_none")]
    pub attributes: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
    #[serde(rename = "ChannelType", skip_serializing_if = "Option::is_none")]
    pub channel_type: std::option::Option<crate::model::ChannelType>,
    #[serde(rename = "Demographic", skip_serializing_if = "Option::is_none")]
    pub demographic: std::option::Option<crate::model::EndpointDemographic>,
    #[serde(rename = "EffectiveDate", skip_serializing_if = "Option::is_none")]
    pub effective_date: std::option::Option<std::string::String>,
    #[serde(rename = "EndpointStatus", skip_serializing_if = "Option::is_none")]
    pub endpoint_status: std::option::Option<std::string::String>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: std::option::Option<std::string::String>,
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub location: std::option::Option<crate::model::EndpointLocation>,
    #[serde(rename = "Metrics", skip_serializing_if = "Option::is_none")]
    pub metrics: std::option::Option<std::collections::HashMap<std::string::String, f64>>,
    #[serde(rename = "OptOut", skip_serializing_if = "Option::is_none")]
    pub opt_out: std::option::Option<std::string::String>,
    #[serde(rename = "RequestId", skip_serializing_if = "Option::is_none")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "User", skip_serializing_if = "Option::is_none")]
    pub user: std::option::Option<crate::model::EndpointUser>,
}
impl EndpointBatchItem {
    pub fn address(&self) -> std::option::Option<&str> {
        self.address.as_deref()
    }
    pub fn attributes(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>> {
        self.attributes.as_ref()
    }
    pub fn channel_type(&self) -> std::option::Option<&crate::model::ChannelType> {
        self.channel_type.as_ref()
    }
    pub fn demographic(&self) -> std::option::Option<&crate::model::EndpointDemographic> {
        self.demographic.as_ref()
    }
    pub fn effective_date(&self) -> std::option::Option<&str> {
        self.effective_date.as_deref()
    }
    pub fn endpoint_status(&self) -> std::option::Option<&str> {
        self.endpoint_status.as_deref()
    }
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    pub fn location(&self) -> std::option::Option<&crate::model::EndpointLocation> {
        self.location.as_ref()
    }
    pub fn metrics(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, f64>> {
        self.metrics.as_ref()
    }
    pub fn opt_out(&self) -> std::option::Option<&str> {
        self.opt_out.as_deref()
    }
    pub fn request_id(&self) -> std::option::Option<&str> {
        self.request_id.as_deref()
    }
    pub fn user(&self) -> std::option::Option<&crate::model::EndpointUser> {
        self.user.as_ref()
    }
}
/// See [`EndpointBatchItem`](crate::model::EndpointBatchItem)
pub mod endpoint_batch_item {
    /// A builder for [`EndpointBatchItem`](crate::model::EndpointBatchItem)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) address: std::option::Option<std::string::String>,
        pub(crate) attributes: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
        pub(crate) channel_type: std::option::Option<crate::model::ChannelType>,
        pub(crate) demographic: std::option::Option<crate::model::EndpointDemographic>,
        pub(crate) effective_date: std::option::Option<std::string::String>,
        pub(crate) endpoint_status: std::option::Option<std::string::String>,
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) location: std::option::Option<crate::model::EndpointLocation>,
        pub(crate) metrics: std::option::Option<std::collections::HashMap<std::string::String, f64>>,
        pub(crate) opt_out: std::option::Option<std::string::String>,
        pub(crate) request_id: std::option::Option<std::string::String>,
        pub(crate) user: std::option::Option<crate::model::EndpointUser>,
    }
    impl Builder {
        pub fn address(mut self, input: impl Into<std::string::String>) -> Self {
            self.address = Some(input.into());
            self
        }
        pub fn set_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.address = input;
            self
        }
        /// Adds a key-value pair to `attributes`.
        ///
        /// To override the contents of this collection use [`set_attributes`](Self::set_attributes).
        pub fn attributes(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<std::string::String>>,
        ) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.attributes = Some(hash_map);
            self
        }
        pub fn set_attributes(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>) -> Self {
            self.attributes = input;
            self
        }
        pub fn channel_type(mut self, input: crate::model::ChannelType) -> Self {
            self.channel_type = Some(input);
            self
        }
        pub fn set_channel_type(mut self, input: std::option::Option<crate::model::ChannelType>) -> Self {
            self.channel_type = input;
            self
        }
        pub fn demographic(mut self, input: crate::model::EndpointDemographic) -> Self {
            self.demographic = Some(input);
            self
        }
        pub fn set_demographic(mut self, input: std::option::Option<crate::model::EndpointDemographic>) -> Self {
            self.demographic = input;
            self
        }
        pub fn effective_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.effective_date = Some(input.into());
            self
        }
        pub fn set_effective_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.effective_date = input;
            self
        }
        pub fn endpoint_status(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_status = Some(input.into());
            self
        }
        pub fn set_endpoint_status(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_status = input;
            self
        }
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn location(mut self, input: crate::model::EndpointLocation) -> Self {
            self.location = Some(input);
            self
        }
        pub fn set_location(mut self, input: std::option::Option<crate::model::EndpointLocation>) -> Self {
            self.location = input;
            self
        }
        /// Adds a key-value pair to `metrics`.
        ///
        /// To override the contents of this collection use [`set_metrics`](Self::set_metrics).
        pub fn metrics(
            mut self,
            k: impl Into<std::string::String>,
            v: f64,
        ) -> Self {
            let mut hash_map = self.metrics.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.metrics = Some(hash_map);
            self
        }
        pub fn set_metrics(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, f64>>) -> Self {
            self.metrics = input;
            self
        }
        pub fn opt_out(mut self, input: impl Into<std::string::String>) -> Self {
            self.opt_out = Some(input.into());
            self
        }
        pub fn set_opt_out(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.opt_out = input;
            self
        }
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn user(mut self, input: crate::model::EndpointUser) -> Self {
            self.user = Some(input);
            self
        }
        pub fn set_user(mut self, input: std::option::Option<crate::model::EndpointUser>) -> Self {
            self.user = input;
            self
        }
        /// Consumes the builder and constructs a [`EndpointBatchItem`](crate::model::EndpointBatchItem)
        pub fn build(self) -> crate::model::EndpointBatchItem {
            crate::model::EndpointBatchItem {
                address: self.address,
                attributes: self.attributes,
                channel_type: self.channel_type,
                demographic: self.demographic,
                effective_date: self.effective_date,
                endpoint_status: self.endpoint_status,
                id: self.id,
                location: self.location,
                metrics: self.metrics,
                opt_out: self.opt_out,
                request_id: self.request_id,
                user: self.user,
            }
        }
    }
}
impl EndpointBatchItem {
    /// Creates a new builder-style object to manufacture [`EndpointBatchItem`](crate::model::EndpointBatchItem)
    pub fn builder() -> crate::model::endpoint_batch_item::Builder {
        crate::model::endpoint_batch_item::Builder::default()
    }
}

/// Specifies demographic information about an endpoint, such as the applicable time zone and
/// platform.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct EndpointDemographic {
    #[serde(rename = "AppVersion", skip_serializing_if = "Option::is_none")]
    pub app_version: std::option::Option<std::string::String>,
    #[serde(rename = "Locale", skip_serializing_if = "Option::is_none")]
    pub locale: std::option::Option<std::string::String>,
    #[serde(rename = "Make", skip_serializing_if = "Option::is_none")]
    pub make: std::option::Option<std::string::String>,
    #[serde(rename = "Model", skip_serializing_if = "Option::is_none")]
    pub model: std::option::Option<std::string::String>,
    #[serde(rename = "ModelVersion", skip_serializing_if = "Option::is_none")]
    pub model_version: std::option::Option<std::string::String>,
    #[serde(rename = "Platform", skip_serializing_if = "Option::is_none")]
    pub platform: std::option::Option<std::string::String>,
    #[serde(rename = "PlatformVersion", skip_serializing_if = "Option::is_none")]
    pub platform_version: std::option::Option<std::string::String>,
    #[serde(rename = "Timezone", skip_serializing_if = "Option::is_none")]
    pub timezone: std::option::Option<std::string::String>,
}
impl EndpointDemographic {
    pub fn app_version(&self) -> std::option::Option<&str> {
        self.app_version.as_deref()
    }
    pub fn locale(&self) -> std::option::Option<&str> {
        self.locale.as_deref()
    }
    pub fn make(&self) -> std::option::Option<&str> {
        self.make.as_deref()
    }
    pub fn model(&self) -> std::option::Option<&str> {
        self.model.as_deref()
    }
    pub fn model_version(&self) -> std::option::Option<&str> {
        self.model_version.as_deref()
    }
    pub fn platform(&self) -> std::option::Option<&str> {
        self.platform.as_deref()
    }
    pub fn platform_version(&self) -> std::option::Option<&str> {
        self.platform_version.as_deref()
    }
    pub fn timezone(&self) -> std::option::Option<&str> {
        self.timezone.as_deref()
    }
}
/// See [`EndpointDemographic`](crate::model::EndpointDemographic)
pub mod endpoint_demographic {
    /// A builder for [`EndpointDemographic`](crate::model::EndpointDemographic)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) app_version: std::option::Option<std::string::String>,
        pub(crate) locale: std::option::Option<std::string::String>,
        pub(crate) make: std::option::Option<std::string::String>,
        pub(crate) model: std::option::Option<std::string::String>,
        pub(crate) model_version: std::option::Option<std::string::String>,
        pub(crate) platform: std::option::Option<std::string::String>,
        pub(crate) platform_version: std::option::Option<std::string::String>,
        pub(crate) timezone: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn app_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.app_version = Some(input.into());
            self
        }
        pub fn set_app_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.app_version = input;
            self
        }
        pub fn locale(mut self, input: impl Into<std::string::String>) -> Self {
            self.locale = Some(input.into());
            self
        }
        pub fn set_locale(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.locale = input;
            self
        }
        pub fn make(mut self, input: impl Into<std::string::String>) -> Self {
            self.make = Some(input.into());
            self
        }
        pub fn set_make(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.make = input;
            self
        }
        pub fn model(mut self, input: impl Into<std::string::String>) -> Self {
            self.model = Some(input.into());
            self
        }
        pub fn set_model(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.model = input;
            self
        }
        pub fn model_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.model_version = Some(input.into());
            self
        }
        pub fn set_model_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.model_version = input;
            self
        }
        pub fn platform(mut self, input: impl Into<std::string::String>) -> Self {
            self.platform = Some(input.into());
            self
        }
        pub fn set_platform(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.platform = input;
            self
        }
        pub fn platform_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.platform_version = Some(input.into());
            self
        }
        pub fn set_platform_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.platform_version = input;
            self
        }
        pub fn timezone(mut self, input: impl Into<std::string::String>) -> Self {
            self.timezone = Some(input.into());
            self
        }
        pub fn set_timezone(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.timezone = input;
            self
        }
        /// Consumes the builder and constructs a [`EndpointDemographic`](crate::model::EndpointDemographic)
        pub fn build(self) -> crate::model::EndpointDemographic {
            crate::model::EndpointDemographic {
                app_version: self.app_version,
                locale: self.locale,
                make: self.make,
                model: self.model,
                model_version: self.model_version,
                platform: self.platform,
                platform_version: self.platform_version,
                timezone: self.timezone,
            }
        }
    }
}
impl EndpointDemographic {
    /// Creates a new builder-style object to manufacture [`EndpointDemographic`](crate::model::EndpointDemographic)
    pub fn builder() -> crate::model::endpoint_demographic::Builder {
        crate::model::endpoint_demographic::Builder::default()
    }
}

/// Specifies geographic information about an endpoint.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct EndpointLocation {
    #[serde(rename = "City", skip_serializing_if = "Option::is_none")]
    pub city: std::option::Option<std::string::String>,
    /// The two-character code, in ISO 3166-1 alpha-2 format, for the country or region where the
    /// endpoint is located.
    #[serde(rename = "Country", skip_serializing_if = "Option::is_none")]
    pub country: std::option::Option<std::string::String>,
    #[serde(rename = "Latitude", skip_serializing_if = "Option::is_none")]
    pub latitude: std::option::Option<f64>,
    #[serde(rename = "Longitude", skip_serializing_if = "Option::is_none")]
    pub longitude: std::option::Option<f64>,
    #[serde(rename = "PostalCode", skip_serializing_if = "Option::is_none")]
    pub postal_code: std::option::Option<std::string::String>,
    #[serde(rename = "Region", skip_serializing_if = "Option::is_none")]
    pub region: std::option::Option<std::string::String>,
}
impl EndpointLocation {
    pub fn city(&self) -> std::option::Option<&str> {
        self.city.as_deref()
    }
    pub fn country(&self) -> std::option::Option<&str> {
        self.country.as_deref()
    }
    pub fn latitude(&self) -> std::option::Option<f64> {
        self.latitude
    }
    pub fn longitude(&self) -> std::option::Option<f64> {
        self.longitude
    }
    pub fn postal_code(&self) -> std::option::Option<&str> {
        self.postal_code.as_deref()
    }
    pub fn region(&self) -> std::option::Option<&str> {
        self.region.as_deref()
    }
}
/// See [`EndpointLocation`](crate::model::EndpointLocation)
pub mod endpoint_location {
    /// A builder for [`EndpointLocation`](crate::model::EndpointLocation)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) city: std::option::Option<std::string::String>,
        pub(crate) country: std::option::Option<std::string::String>,
        pub(crate) latitude: std::option::Option<f64>,
        pub(crate) longitude: std::option::Option<f64>,
        pub(crate) postal_code: std::option::Option<std::string::String>,
        pub(crate) region: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn city(mut self, input: impl Into<std::string::String>) -> Self {
            self.city = Some(input.into());
            self
        }
        pub fn set_city(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.city = input;
            self
        }
        pub fn country(mut self, input: impl Into<std::string::String>) -> Self {
            self.country = Some(input.into());
            self
        }
        pub fn set_country(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.country = input;
            self
        }
        pub fn latitude(mut self, input: f64) -> Self {
            self.latitude = Some(input);
            self
        }
        pub fn set_latitude(mut self, input: std::option::Option<f64>) -> Self {
            self.latitude = input;
            self
        }
        pub fn longitude(mut self, input: f64) -> Self {
            self.longitude = Some(input);
            self
        }
        pub fn set_longitude(mut self, input: std::option::Option<f64>) -> Self {
            self.longitude = input;
            self
        }
        pub fn postal_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.postal_code = Some(input.into());
            self
        }
        pub fn set_postal_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.postal_code = input;
            self
        }
        pub fn region(mut self, input: impl Into<std::string::String>) -> Self {
            self.region = Some(input.into());
            self
        }
        pub fn set_region(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.region = input;
            self
        }
        /// Consumes the builder and constructs a [`EndpointLocation`](crate::model::EndpointLocation)
        pub fn build(self) -> crate::model::EndpointLocation {
            crate::model::EndpointLocation {
                city: self.city,
                country: self.country,
                latitude: self.latitude,
                longitude: self.longitude,
                postal_code: self.postal_code,
                region: self.region,
            }
        }
    }
}
impl EndpointLocation {
    /// Creates a new builder-style object to manufacture [`EndpointLocation`](crate::model::EndpointLocation)
    pub fn builder() -> crate::model::endpoint_location::Builder {
        crate::model::endpoint_location::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct EndpointUser {
    #[serde(rename = "UserAttributes", skip_serializing_if = "Option::is_none")]
    pub user_attributes: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
    #[serde(rename = "UserId", skip_serializing_if = "Option::is_none")]
    pub user_id: std::option::Option<std::string::String>,
}
impl EndpointUser {
    pub fn user_attributes(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>> {
        self.user_attributes.as_ref()
    }
    pub fn user_id(&self) -> std::option::Option<&str> {
        self.user_id.as_deref()
    }
}
/// See [`EndpointUser`](crate::model::EndpointUser)
pub mod endpoint_user {
    /// A builder for [`EndpointUser`](crate::model::EndpointUser)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) user_attributes: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
        pub(crate) user_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Adds a key-value pair to `user_attributes`.
        ///
        /// To override the contents of this collection use [`set_user_attributes`](Self::set_user_attributes).
        pub fn user_attributes(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<std::string::String>>,
        ) -> Self {
            let mut hash_map = self.user_attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.user_attributes = Some(hash_map);
            self
        }
        pub fn set_user_attributes(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>) -> Self {
            self.user_attributes = input;
            self
        }
        pub fn user_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.user_id = Some(input.into());
            self
        }
        pub fn set_user_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.user_id = input;
            self
        }
        /// Consumes the builder and constructs a [`EndpointUser`](crate::model::EndpointUser)
        pub fn build(self) -> crate::model::EndpointUser {
            crate::model::EndpointUser {
                user_attributes: self.user_attributes,
                user_id: self.user_id,
            }
        }
    }
}
impl EndpointUser {
    /// Creates a new builder-style object to manufacture [`EndpointUser`](crate::model::EndpointUser)
    pub fn builder() -> crate::model::endpoint_user::Builder {
        crate::model::endpoint_user::Builder::default()
    }
}

/// Provides information about an API request or response.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct MessageBody {
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    pub message: std::option::Option<std::string::String>,
    #[serde(rename = "RequestID", skip_serializing_if = "Option::is_none")]
    pub request_id: std::option::Option<std::string::String>,
}
impl MessageBody {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
    pub fn request_id(&self) -> std::option::Option<&str> {
        self.request_id.as_deref()
    }
}
/// See [`MessageBody`](crate::model::MessageBody)
pub mod message_body {
    /// A builder for [`MessageBody`](crate::model::MessageBody)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
        pub(crate) request_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// Consumes the builder and constructs a [`MessageBody`](crate::model::MessageBody)
        pub fn build(self) -> crate::model::MessageBody {
            crate::model::MessageBody {
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}
impl MessageBody {
    /// Creates a new builder-style object to manufacture [`MessageBody`](crate::model::MessageBody)
    pub fn builder() -> crate::model::message_body::Builder {
        crate::model::message_body::Builder::default()
    }
}

/// Specifies the settings for a job that imports endpoint definitions from an Amazon Simple Storage
/// Service (Amazon S3) bucket.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct ImportJobRequest {
    #[serde(rename = "DefineSegment", skip_serializing_if = "Option::is_none")]
    pub define_segment: std::option::Option<bool>,
    #[serde(rename = "ExternalId", skip_serializing_if = "Option::is_none")]
    pub external_id: std::option::Option<std::string::String>,
    #[serde(rename = "Format", skip_serializing_if = "Option::is_none")]
    pub format: std::option::Option<crate::model::Format>,
    #[serde(rename = "RegisterEndpoints", skip_serializing_if = "Option::is_none")]
    pub register_endpoints: std::option::Option<bool>,
    #[serde(rename = "RoleArn", skip_serializing_if = "Option::is_none")]
    pub role_arn: std::option::Option<std::string::String>,
    /// The URL of the Amazon S3 bucket that contains the endpoint definitions to import, in the
    /// form `s3://bucket-name/folder-name/file-name`.
    #[serde(rename = "S3Url", skip_serializing_if = "Option::is_none")]
    pub s3_url: std::option::Option<std::string::String>,
    #[serde(rename = "SegmentId", skip_serializing_if = "Option::is_none")]
    pub segment_id: std::option::Option<std::string::String>,
    #[serde(rename = "SegmentName", skip_serializing_if = "Option::is_none")]
    pub segment_name: std::option::Option<std::string::String>,
}
impl ImportJobRequest {
    pub fn define_segment(&self) -> std::option::Option<bool> {
        self.define_segment
    }
    pub fn external_id(&self) -> std::option::Option<&str> {
        self.external_id.as_deref()
    }
    pub fn format(&self) -> std::option::Option<&crate::model::Format> {
        self.format.as_ref()
    }
    pub fn register_endpoints(&self) -> std::option::Option<bool> {
        self.register_endpoints
    }
    pub fn role_arn(&self) -> std::option::Option<&str> {
        self.role_arn.as_deref()
    }
    pub fn s3_url(&self) -> std::option::Option<&str> {
        self.s3_url.as_deref()
    }
    pub fn segment_id(&self) -> std::option::Option<&str> {
        self.segment_id.as_deref()
    }
    pub fn segment_name(&self) -> std::option::Option<&str> {
        self.segment_name.as_deref()
    }
}
/// See [`ImportJobRequest`](crate::model::ImportJobRequest)
pub mod import_job_request {
    /// A builder for [`ImportJobRequest`](crate::model::ImportJobRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) define_segment: std::option::Option<bool>,
        pub(crate) external_id: std::option::Option<std::string::String>,
        pub(crate) format: std::option::Option<crate::model::Format>,
        pub(crate) register_endpoints: std::option::Option<bool>,
        pub(crate) role_arn: std::option::Option<std::string::String>,
        pub(crate) s3_url: std::option::Option<std::string::String>,
        pub(crate) segment_id: std::option::Option<std::string::String>,
        pub(crate) segment_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn define_segment(mut self, input: bool) -> Self {
            self.define_segment = Some(input);
            self
        }
        pub fn set_define_segment(mut self, input: std::option::Option<bool>) -> Self {
            self.define_segment = input;
            self
        }
        pub fn external_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.external_id = Some(input.into());
            self
        }
        pub fn set_external_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.external_id = input;
            self
        }
        pub fn format(mut self, input: crate::model::Format) -> Self {
            self.format = Some(input);
            self
        }
        pub fn set_format(mut self, input: std::option::Option<crate::model::Format>) -> Self {
            self.format = input;
            self
        }
        pub fn register_endpoints(mut self, input: bool) -> Self {
            self.register_endpoints = Some(input);
            self
        }
        pub fn set_register_endpoints(mut self, input: std::option::Option<bool>) -> Self {
            self.register_endpoints = input;
            self
        }
        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.role_arn = Some(input.into());
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.role_arn = input;
            self
        }
        pub fn s3_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.s3_url = Some(input.into());
            self
        }
        pub fn set_s3_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.s3_url = input;
            self
        }
        pub fn segment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.segment_id = Some(input.into());
            self
        }
        pub fn set_segment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.segment_id = input;
            self
        }
        pub fn segment_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.segment_name = Some(input.into());
            self
        }
        pub fn set_segment_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.segment_name = input;
            self
        }
        /// Consumes the builder and constructs a [`ImportJobRequest`](crate::model::ImportJobRequest)
        pub fn build(self) -> crate::model::ImportJobRequest {
            crate::model::ImportJobRequest {
                define_segment: self.define_segment,
                external_id: self.external_id,
                format: self.format,
                register_endpoints: self.register_endpoints,
                role_arn: self.role_arn,
                s3_url: self.s3_url,
                segment_id: self.segment_id,
                segment_name: self.segment_name,
            }
        }
    }
}
impl ImportJobRequest {
    /// Creates a new builder-style object to manufacture [`ImportJobRequest`](crate::model::ImportJobRequest)
    pub fn builder() -> crate::model::import_job_request::Builder {
        crate::model::import_job_request::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct ImportJobResource {
    #[serde(rename = "DefineSegment", skip_serializing_if = "Option::is_none")]
    pub define_segment: std::option::Option<bool>,
    #[serde(rename = "ExternalId", skip_serializing_if = "Option::is_none")]
    pub external_id: std::option::Option<std::string::String>,
    #[serde(rename = "Format", skip_serializing_if = "Option::is_none")]
    pub format: std::option::Option<crate::model::Format>,
    #[serde(rename = "RegisterEndpoints", skip_serializing_if = "Option::is_none")]
    pub register_endpoints: std::option::Option<bool>,
    #[serde(rename = "RoleArn", skip_serializing_if = "Option::is_none")]
    pub role_arn: std::option::Option<std::string::String>,
    #[serde(rename = "S3Url", skip_serializing_if = "Option::is_none")]
    pub s3_url: std::option::Option<std::string::String>,
    #[serde(rename = "SegmentId", skip_serializing_if = "Option::is_none")]
    pub segment_id: std::option::Option<std::string::String>,
    #[serde(rename = "SegmentName", skip_serializing_if = "Option::is_none")]
    pub segment_name: std::option::Option<std::string::String>,
}
impl ImportJobResource {
    pub fn define_segment(&self) -> std::option::Option<bool> {
        self.define_segment
    }
    pub fn external_id(&self) -> std::option::Option<&str> {
        self.external_id.as_deref()
    }
    pub fn format(&self) -> std::option::Option<&crate::model::Format> {
        self.format.as_ref()
    }
    pub fn register_endpoints(&self) -> std::option::Option<bool> {
        self.register_endpoints
    }
    pub fn role_arn(&self) -> std::option::Option<&str> {
        self.role_arn.as_deref()
    }
    pub fn s3_url(&self) -> std::option::Option<&str> {
        self.s3_url.as_deref()
    }
    pub fn segment_id(&self) -> std::option::Option<&str> {
        self.segment_id.as_deref()
    }
    pub fn segment_name(&self) -> std::option::Option<&str> {
        self.segment_name.as_deref()
    }
}
/// See [`ImportJobResource`](crate::model::ImportJobResource)
pub mod import_job_resource {
    /// A builder for [`ImportJobResource`](crate::model::ImportJobResource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) define_segment: std::option::Option<bool>,
        pub(crate) external_id: std::option::Option<std::string::String>,
        pub(crate) format: std::option::Option<crate::model::Format>,
        pub(crate) register_endpoints: std::option::Option<bool>,
        pub(crate) role_arn: std::option::Option<std::string::String>,
        pub(crate) s3_url: std::option::Option<std::string::String>,
        pub(crate) segment_id: std::option::Option<std::string::String>,
        pub(crate) segment_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn define_segment(mut self, input: bool) -> Self {
            self.define_segment = Some(input);
            self
        }
        pub fn set_define_segment(mut self, input: std::option::Option<bool>) -> Self {
            self.define_segment = input;
            self
        }
        pub fn external_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.external_id = Some(input.into());
            self
        }
        pub fn set_external_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.external_id = input;
            self
        }
        pub fn format(mut self, input: crate::model::Format) -> Self {
            self.format = Some(input);
            self
        }
        pub fn set_format(mut self, input: std::option::Option<crate::model::Format>) -> Self {
            self.format = input;
            self
        }
        pub fn register_endpoints(mut self, input: bool) -> Self {
            self.register_endpoints = Some(input);
            self
        }
        pub fn set_register_endpoints(mut self, input: std::option::Option<bool>) -> Self {
            self.register_endpoints = input;
            self
        }
        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.role_arn = Some(input.into());
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.role_arn = input;
            self
        }
        pub fn s3_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.s3_url = Some(input.into());
            self
        }
        pub fn set_s3_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.s3_url = input;
            self
        }
        pub fn segment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.segment_id = Some(input.into());
            self
        }
        pub fn set_segment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.segment_id = input;
            self
        }
        pub fn segment_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.segment_name = Some(input.into());
            self
        }
        pub fn set_segment_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.segment_name = input;
            self
        }
        /// Consumes the builder and constructs a [`ImportJobResource`](crate::model::ImportJobResource)
        pub fn build(self) -> crate::model::ImportJobResource {
            crate::model::ImportJobResource {
                define_segment: self.define_segment,
                external_id: self.external_id,
                format: self.format,
                register_endpoints: self.register_endpoints,
                role_arn: self.role_arn,
                s3_url: self.s3_url,
                segment_id: self.segment_id,
                segment_name: self.segment_name,
            }
        }
    }
}
impl ImportJobResource {
    /// Creates a new builder-style object to manufacture [`ImportJobResource`](crate::model::ImportJobResource)
    pub fn builder() -> crate::model::import_job_resource::Builder {
        crate::model::import_job_resource::Builder::default()
    }
}

/// Provides information about the status and settings of a job that imports endpoint definitions
/// from one or more files.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct ImportJobResponse {
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub application_id: std::option::Option<std::string::String>,
    #[serde(rename = "CompletedPieces", skip_serializing_if = "Option::is_none")]
    pub completed_pieces: std::option::Option<i32>,
    #[serde(rename = "CompletionDate", skip_serializing_if = "Option::is_none")]
    pub completion_date: std::option::Option<std::string::String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub creation_date: std::option::Option<std::string::String>,
    #[serde(rename = "Definition", skip_serializing_if = "Option::is_none")]
    pub definition: std::option::Option<crate::model::ImportJobResource>,
    #[serde(rename = "FailedPieces", skip_serializing_if = "Option::is_none")]
    pub failed_pieces: std::option::Option<i32>,
    #[serde(rename = "Failures", skip_serializing_if = "Option::is_none")]
    pub failures: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: std::option::Option<std::string::String>,
    #[serde(rename = "JobStatus", skip_serializing_if = "Option::is_none")]
    pub job_status: std::option::Option<crate::model::JobStatus>,
    #[serde(rename = "TotalFailures", skip_serializing_if = "Option::is_none")]
    pub total_failures: std::option::Option<i32>,
    #[serde(rename = "TotalPieces", skip_serializing_if = "Option::is_none")]
    pub total_pieces: std::option::Option<i32>,
    #[serde(rename = "TotalProcessed", skip_serializing_if = "Option::is_none")]
    pub total_processed: std::option::Option<i32>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: std::option::Option<std::string::String>,
}
impl ImportJobResponse {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn completed_pieces(&self) -> std::option::Option<i32> {
        self.completed_pieces
    }
    pub fn completion_date(&self) -> std::option::Option<&str> {
        self.completion_date.as_deref()
    }
    pub fn creation_date(&self) -> std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    pub fn definition(&self) -> std::option::Option<&crate::model::ImportJobResource> {
        self.definition.as_ref()
    }
    pub fn failed_pieces(&self) -> std::option::Option<i32> {
        self.failed_pieces
    }
    pub fn failures(&self) -> std::option::Option<&[std::string::String]> {
        self.failures.as_deref()
    }
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    pub fn job_status(&self) -> std::option::Option<&crate::model::JobStatus> {
        self.job_status.as_ref()
    }
    pub fn total_failures(&self) -> std::option::Option<i32> {
        self.total_failures
    }
    pub fn total_pieces(&self) -> std::option::Option<i32> {
        self.total_pieces
    }
    pub fn total_processed(&self) -> std::option::Option<i32> {
        self.total_processed
    }
    pub fn r#type(&self) -> std::option::Option<&str> {
        self.r#type.as_deref()
    }
}
/// See [`ImportJobResponse`](crate::model::ImportJobResponse)
pub mod import_job_response {
    /// A builder for [`ImportJobResponse`](crate::model::ImportJobResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) completed_pieces: std::option::Option<i32>,
        pub(crate) completion_date: std::option::Option<std::string::String>,
        pub(crate) creation_date: std::option::Option<std::string::String>,
        pub(crate) definition: std::option::Option<crate::model::ImportJobResource>,
        pub(crate) failed_pieces: std::option::Option<i32>,
        pub(crate) failures: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) job_status: std::option::Option<crate::model::JobStatus>,
        pub(crate) total_failures: std::option::Option<i32>,
        pub(crate) total_pieces: std::option::Option<i32>,
        pub(crate) total_processed: std::option::Option<i32>,
        pub(crate) r#type: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn completed_pieces(mut self, input: i32) -> Self {
            self.completed_pieces = Some(input);
            self
        }
        pub fn set_completed_pieces(mut self, input: std::option::Option<i32>) -> Self {
            self.completed_pieces = input;
            self
        }
        pub fn completion_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.completion_date = Some(input.into());
            self
        }
        pub fn set_completion_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.completion_date = input;
            self
        }
        pub fn creation_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.creation_date = Some(input.into());
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creation_date = input;
            self
        }
        pub fn definition(mut self, input: crate::model::ImportJobResource) -> Self {
            self.definition = Some(input);
            self
        }
        pub fn set_definition(mut self, input: std::option::Option<crate::model::ImportJobResource>) -> Self {
            self.definition = input;
            self
        }
        pub fn failed_pieces(mut self, input: i32) -> Self {
            self.failed_pieces = Some(input);
            self
        }
        pub fn set_failed_pieces(mut self, input: std::option::Option<i32>) -> Self {
            self.failed_pieces = input;
            self
        }
        /// Appends an item to `failures`.
        ///
        /// To override the contents of this collection use [`set_failures`](Self::set_failures).
        pub fn failures(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.failures.unwrap_or_default();
            v.push(input.into());
            self.failures = Some(v);
            self
        }
        pub fn set_failures(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.failures = input;
            self
        }
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn job_status(mut self, input: crate::model::JobStatus) -> Self {
            self.job_status = Some(input);
            self
        }
        pub fn set_job_status(mut self, input: std::option::Option<crate::model::JobStatus>) -> Self {
            self.job_status = input;
            self
        }
        pub fn total_failures(mut self, input: i32) -> Self {
            self.total_failures = Some(input);
            self
        }
        pub fn set_total_failures(mut self, input: std::option::Option<i32>) -> Self {
            self.total_failures = input;
            self
        }
        pub fn total_pieces(mut self, input: i32) -> Self {
            self.total_pieces = Some(input);
            self
        }
        pub fn set_total_pieces(mut self, input: std::option::Option<i32>) -> Self {
            self.total_pieces = input;
            self
        }
        pub fn total_processed(mut self, input: i32) -> Self {
            self.total_processed = Some(input);
            self
        }
        pub fn set_total_processed(mut self, input: std::option::Option<i32>) -> Self {
            self.total_processed = input;
            self
        }
        pub fn r#type(mut self, input: impl Into<std::string::String>) -> Self {
            self.r#type = Some(input.into());
            self
        }
        pub fn set_type(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.r#type = input;
            self
        }
        /// Consumes the builder and constructs a [`ImportJobResponse`](crate::model::ImportJobResponse)
        pub fn build(self) -> crate::model::ImportJobResponse {
            crate::model::ImportJobResponse {
                application_id: self.application_id,
                completed_pieces: self.completed_pieces,
                completion_date: self.completion_date,
                creation_date: self.creation_date,
                definition: self.definition,
                failed_pieces: self.failed_pieces,
                failures: self.failures,
                id: self.id,
                job_status: self.job_status,
                total_failures: self.total_failures,
                total_pieces: self.total_pieces,
                total_processed: self.total_processed,
                r#type: self.r#type,
            }
        }
    }
}
impl ImportJobResponse {
    /// Creates a new builder-style object to manufacture [`ImportJobResponse`](crate::model::ImportJobResponse)
    pub fn builder() -> crate::model::import_job_response::Builder {
        crate::model::import_job_response::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct ImportJobsResponse {
    #[serde(rename = "Item", skip_serializing_if = "Option::is_none")]
    pub item: std::option::Option<std::vec::Vec<crate::model::ImportJobResponse>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl ImportJobsResponse {
    pub fn item(&self) -> std::option::Option<&[crate::model::ImportJobResponse]> {
        self.item.as_deref()
    }
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
/// See [`ImportJobsResponse`](crate::model::ImportJobsResponse)
pub mod import_jobs_response {
    /// A builder for [`ImportJobsResponse`](crate::model::ImportJobsResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) item: std::option::Option<std::vec::Vec<crate::model::ImportJobResponse>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `item`.
        ///
        /// To override the contents of this collection use [`set_item`](Self::set_item).
        pub fn item(mut self, input: impl Into<crate::model::ImportJobResponse>) -> Self {
            let mut v = self.item.unwrap_or_default();
            v.push(input.into());
            self.item = Some(v);
            self
        }
        pub fn set_item(mut self, input: std::option::Option<std::vec::Vec<crate::model::ImportJobResponse>>) -> Self {
            self.item = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ImportJobsResponse`](crate::model::ImportJobsResponse)
        pub fn build(self) -> crate::model::ImportJobsResponse {
            crate::model::ImportJobsResponse {
                item: self.item,
                next_token: self.next_token,
            }
        }
    }
}
impl ImportJobsResponse {
    /// Creates a new builder-style object to manufacture [`ImportJobsResponse`](crate::model::ImportJobsResponse)
    pub fn builder() -> crate::model::import_jobs_response::Builder {
        crate::model::import_jobs_response::Builder::default()
    }
}

/// Specifies the configuration, dimension, and other settings for a segment.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct WriteSegmentRequest {
    #[serde(rename = "Dimensions", skip_serializing_if = "Option::is_none")]
    pub dimensions: std::option::Option<crate::model::SegmentDimensions>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
impl WriteSegmentRequest {
    pub fn dimensions(&self) -> std::option::Option<&crate::model::SegmentDimensions> {
        self.dimensions.as_ref()
    }
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    pub fn tags(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.tags.as_ref()
    }
}
/// See [`WriteSegmentRequest`](crate::model::WriteSegmentRequest)
pub mod write_segment_request {
    /// A builder for [`WriteSegmentRequest`](crate::model::WriteSegmentRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) dimensions: std::option::Option<crate::model::SegmentDimensions>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn dimensions(mut self, input: crate::model::SegmentDimensions) -> Self {
            self.dimensions = Some(input);
            self
        }
        pub fn set_dimensions(mut self, input: std::option::Option<crate::model::SegmentDimensions>) -> Self {
            self.dimensions = input;
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        /// Adds a key-value pair to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`WriteSegmentRequest`](crate::model::WriteSegmentRequest)
        pub fn build(self) -> crate::model::WriteSegmentRequest {
            crate::model::WriteSegmentRequest {
                dimensions: self.dimensions,
                name: self.name,
                tags: self.tags,
            }
        }
    }
}
impl WriteSegmentRequest {
    /// Creates a new builder-style object to manufacture [`WriteSegmentRequest`](crate::model::WriteSegmentRequest)
    pub fn builder() -> crate::model::write_segment_request::Builder {
        crate::model::write_segment_request::Builder::default()
    }
}

/// Provides information about the configuration, dimension, and other settings for a segment.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct SegmentResponse {
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub application_id: std::option::Option<std::string::String>,
    #[serde(rename = "Arn", skip_serializing_if = "Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub creation_date: std::option::Option<std::string::String>,
    #[serde(rename = "Dimensions", skip_serializing_if = "Option::is_none")]
    pub dimensions: std::option::Option<crate::model::SegmentDimensions>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: std::option::Option<std::string::String>,
    #[serde(rename = "ImportDefinition", skip_serializing_if = "Option::is_none")]
    pub import_definition: std::option::Option<crate::model::SegmentImportResource>,
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub last_modified_date: std::option::Option<std::string::String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "SegmentType", skip_serializing_if = "Option::is_none")]
    pub segment_type: std::option::Option<crate::model::SegmentType>,
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub version: std::option::Option<i32>,
}
impl SegmentResponse {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn arn(&self) -> std::option::Option<&str> {
        self.arn.as_deref()
    }
    pub fn creation_date(&self) -> std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    pub fn dimensions(&self) -> std::option::Option<&crate::model::SegmentDimensions> {
        self.dimensions.as_ref()
    }
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    pub fn import_definition(&self) -> std::option::Option<&crate::model::SegmentImportResource> {
        self.import_definition.as_ref()
    }
    pub fn last_modified_date(&self) -> std::option::Option<&str> {
        self.last_modified_date.as_deref()
    }
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    pub fn segment_type(&self) -> std::option::Option<&crate::model::SegmentType> {
        self.segment_type.as_ref()
    }
    pub fn tags(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.tags.as_ref()
    }
    pub fn version(&self) -> std::option::Option<i32> {
        self.version
    }
}
/// See [`SegmentResponse`](crate::model::SegmentResponse)
pub mod segment_response {
    /// A builder for [`SegmentResponse`](crate::model::SegmentResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) arn: std::option::Option<std::string::String>,
        pub(crate) creation_date: std::option::Option<std::string::String>,
        pub(crate) dimensions: std::option::Option<crate::model::SegmentDimensions>,
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) import_definition: std::option::Option<crate::model::SegmentImportResource>,
        pub(crate) last_modified_date: std::option::Option<std::string::String>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) segment_type: std::option::Option<crate::model::SegmentType>,
        pub(crate) tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) version: std::option::Option<i32>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        pub fn creation_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.creation_date = Some(input.into());
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creation_date = input;
            self
        }
        pub fn dimensions(mut self, input: crate::model::SegmentDimensions) -> Self {
            self.dimensions = Some(input);
            self
        }
        pub fn set_dimensions(mut self, input: std::option::Option<crate::model::SegmentDimensions>) -> Self {
            self.dimensions = input;
            self
        }
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn import_definition(mut self, input: crate::model::SegmentImportResource) -> Self {
            self.import_definition = Some(input);
            self
        }
        pub fn set_import_definition(mut self, input: std::option::Option<crate::model::SegmentImportResource>) -> Self {
            self.import_definition = input;
            self
        }
        pub fn last_modified_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_modified_date = Some(input.into());
            self
        }
        pub fn set_last_modified_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.last_modified_date = input;
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn segment_type(mut self, input: crate::model::SegmentType) -> Self {
            self.segment_type = Some(input);
            self
        }
        pub fn set_segment_type(mut self, input: std::option::Option<crate::model::SegmentType>) -> Self {
            self.segment_type = input;
            self
        }
        /// Adds a key-value pair to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        pub fn version(mut self, input: i32) -> Self {
            self.version = Some(input);
            self
        }
        pub fn set_version(mut self, input: std::option::Option<i32>) -> Self {
            self.version = input;
            self
        }
        /// Consumes the builder and constructs a [`SegmentResponse`](crate::model::SegmentResponse)
        pub fn build(self) -> crate::model::SegmentResponse {
            crate::model::SegmentResponse {
                application_id: self.application_id,
                arn: self.arn,
                creation_date: self.creation_date,
                dimensions: self.dimensions,
                id: self.id,
                import_definition: self.import_definition,
                last_modified_date: self.last_modified_date,
                name: self.name,
                segment_type: self.segment_type,
                tags: self.tags,
                version: self.version,
            }
        }
    }
}
impl SegmentResponse {
    /// Creates a new builder-style object to manufacture [`SegmentResponse`](crate::model::SegmentResponse)
    pub fn builder() -> crate::model::segment_response::Builder {
        crate::model::segment_response::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct SegmentsResponse {
    #[serde(rename = "Item", skip_serializing_if = "Option::is_none")]
    pub item: std::option::Option<std::vec::Vec<crate::model::SegmentResponse>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl SegmentsResponse {
    pub fn item(&self) -> std::option::Option<&[crate::model::SegmentResponse]> {
        self.item.as_deref()
    }
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
/// See [`SegmentsResponse`](crate::model::SegmentsResponse)
pub mod segments_response {
    /// A builder for [`SegmentsResponse`](crate::model::SegmentsResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) item: std::option::Option<std::vec::Vec<crate::model::SegmentResponse>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `item`.
        ///
        /// To override the contents of this collection use [`set_item`](Self::set_item).
        pub fn item(mut self, input: impl Into<crate::model::SegmentResponse>) -> Self {
            let mut v = self.item.unwrap_or_default();
            v.push(input.into());
            self.item = Some(v);
            self
        }
        pub fn set_item(mut self, input: std::option::Option<std::vec::Vec<crate::model::SegmentResponse>>) -> Self {
            self.item = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`SegmentsResponse`](crate::model::SegmentsResponse)
        pub fn build(self) -> crate::model::SegmentsResponse {
            crate::model::SegmentsResponse {
                item: self.item,
                next_token: self.next_token,
            }
        }
    }
}
impl SegmentsResponse {
    /// Creates a new builder-style object to manufacture [`SegmentsResponse`](crate::model::SegmentsResponse)
    pub fn builder() -> crate::model::segments_response::Builder {
        crate::model::segments_response::Builder::default()
    }
}

/// Specifies the dimension settings for a segment.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct SegmentDimensions {
    #[serde(rename = "Attributes", skip_serializing_if = "Option::is_none")]
    pub attributes: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeDimension>>,
    #[serde(rename = "Behavior", skip_serializing_if = "Option::is_none")]
    pub behavior: std::option::Option<crate::model::SegmentBehaviors>,
    #[serde(rename = "Demographic", skip_serializing_if = "Option::is_none")]
    pub demographic: std::option::Option<crate::model::SegmentDemographics>,
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub location: std::option::Option<crate::model::SegmentLocation>,
    #[serde(rename = "Metrics", skip_serializing_if = "Option::is_none")]
    pub metrics: std::option::Option<std::collections::HashMap<std::string::String, crate::model::MetricDimension>>,
    #[serde(rename = "UserAttributes", skip_serializing_if = "Option::is_none")]
    pub user_attributes: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeDimension>>,
}
impl SegmentDimensions {
    pub fn attributes(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, crate::model::AttributeDimension>> {
        self.attributes.as_ref()
    }
    pub fn behavior(&self) -> std::option::Option<&crate::model::SegmentBehaviors> {
        self.behavior.as_ref()
    }
    pub fn demographic(&self) -> std::option::Option<&crate::model::SegmentDemographics> {
        self.demographic.as_ref()
    }
    pub fn location(&self) -> std::option::Option<&crate::model::SegmentLocation> {
        self.location.as_ref()
    }
    pub fn metrics(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, crate::model::MetricDimension>> {
        self.metrics.as_ref()
    }
    pub fn user_attributes(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, crate::model::AttributeDimension>> {
        self.user_attributes.as_ref()
    }
}
/// See [`SegmentDimensions`](crate::model::SegmentDimensions)
pub mod segment_dimensions {
    /// A builder for [`SegmentDimensions`](crate::model::SegmentDimensions)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) attributes: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeDimension>>,
        pub(crate) behavior: std::option::Option<crate::model::SegmentBehaviors>,
        pub(crate) demographic: std::option::Option<crate::model::SegmentDemographics>,
        pub(crate) location: std::option::Option<crate::model::SegmentLocation>,
        pub(crate) metrics: std::option::Option<std::collections::HashMap<std::string::String, crate::model::MetricDimension>>,
        pub(crate) user_attributes: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeDimension>>,
    }
    impl Builder {
        /// Adds a key-value pair to `attributes`.
        ///
        /// To override the contents of this collection use [`set_attributes`](Self::set_attributes).
        pub fn attributes(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeDimension>,
        ) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.attributes = Some(hash_map);
            self
        }
        pub fn set_attributes(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeDimension>>) -> Self {
            self.attributes = input;
            self
        }
        pub fn behavior(mut self, input: crate::model::SegmentBehaviors) -> Self {
            self.behavior = Some(input);
            self
        }
        pub fn set_behavior(mut self, input: std::option::Option<crate::model::SegmentBehaviors>) -> Self {
            self.behavior = input;
            self
        }
        pub fn demographic(mut self, input: crate::model::SegmentDemographics) -> Self {
            self.demographic = Some(input);
            self
        }
        pub fn set_demographic(mut self, input: std::option::Option<crate::model::SegmentDemographics>) -> Self {
            self.demographic = input;
            self
        }
        pub fn location(mut self, input: crate::model::SegmentLocation) -> Self {
            self.location = Some(input);
            self
        }
        pub fn set_location(mut self, input: std::option::Option<crate::model::SegmentLocation>) -> Self {
            self.location = input;
            self
        }
        /// Adds a key-value pair to `metrics`.
        ///
        /// To override the contents of this collection use [`set_metrics`](Self::set_metrics).
        pub fn metrics(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::MetricDimension>,
        ) -> Self {
            let mut hash_map = self.metrics.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.metrics = Some(hash_map);
            self
        }
        pub fn set_metrics(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, crate::model::MetricDimension>>) -> Self {
            self.metrics = input;
            self
        }
        /// Adds a key-value pair to `user_attributes`.
        ///
        /// To override the contents of this collection use [`set_user_attributes`](Self::set_user_attributes).
        pub fn user_attributes(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeDimension>,
        ) -> Self {
            let mut hash_map = self.user_attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.user_attributes = Some(hash_map);
            self
        }
        pub fn set_user_attributes(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeDimension>>) -> Self {
            self.user_attributes = input;
            self
        }
        /// Consumes the builder and constructs a [`SegmentDimensions`](crate::model::SegmentDimensions)
        pub fn build(self) -> crate::model::SegmentDimensions {
            crate::model::SegmentDimensions {
                attributes: self.attributes,
                behavior: self.behavior,
                demographic: self.demographic,
                location: self.location,
                metrics: self.metrics,
                user_attributes: self.user_attributes,
            }
        }
    }
}
impl SegmentDimensions {
    /// Creates a new builder-style object to manufacture [`SegmentDimensions`](crate::model::SegmentDimensions)
    pub fn builder() -> crate::model::segment_dimensions::Builder {
        crate::model::segment_dimensions::Builder::default()
    }
}

/// Specifies attribute-based criteria for including or excluding endpoints from a segment.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct AttributeDimension {
    #[serde(rename = "AttributeType", skip_serializing_if = "Option::is_none")]
    pub attribute_type: std::option::Option<crate::model::AttributeType>,
    #[serde(rename = "Values", skip_serializing_if = "Option::is_none")]
    pub values: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl AttributeDimension {
    pub fn attribute_type(&self) -> std::option::Option<&crate::model::AttributeType> {
        self.attribute_type.as_ref()
    }
    pub fn values(&self) -> std::option::Option<&[std::string::String]> {
        self.values.as_deref()
    }
}
/// See [`AttributeDimension`](crate::model::AttributeDimension)
pub mod attribute_dimension {
    /// A builder for [`AttributeDimension`](crate::model::AttributeDimension)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) attribute_type: std::option::Option<crate::model::AttributeType>,
        pub(crate) values: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        pub fn attribute_type(mut self, input: crate::model::AttributeType) -> Self {
            self.attribute_type = Some(input);
            self
        }
        pub fn set_attribute_type(mut self, input: std::option::Option<crate::model::AttributeType>) -> Self {
            self.attribute_type = input;
            self
        }
        /// Appends an item to `values`.
        ///
        /// To override the contents of this collection use [`set_values`](Self::set_values).
        pub fn values(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.values.unwrap_or_default();
            v.push(input.into());
            self.values = Some(v);
            self
        }
        pub fn set_values(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.values = input;
            self
        }
        /// Consumes the builder and constructs a [`AttributeDimension`](crate::model::AttributeDimension)
        pub fn build(self) -> crate::model::AttributeDimension {
            crate::model::AttributeDimension {
                attribute_type: self.attribute_type,
                values: self.values,
            }
        }
    }
}
impl AttributeDimension {
    /// Creates a new builder-style object to manufacture [`AttributeDimension`](crate::model::AttributeDimension)
    pub fn builder() -> crate::model::attribute_dimension::Builder {
        crate::model::attribute_dimension::Builder::default()
    }
}

/// Specifies metric-based criteria for including or excluding endpoints from a segment.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct MetricDimension {
    /// The operator to use when comparing metric values. Valid values are: `GREATER_THAN`,
    /// `LESS_THAN`, `GREATER_THAN_OR_EQUAL`, `LESS_THAN_OR_EQUAL`, and `EQUAL`.
    #[serde(rename = "ComparisonOperator", skip_serializing_if = "Option::is_none")]
    pub comparison_operator: std::option::Option<std::string::String>,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: std::option::Option<f64>,
}
impl MetricDimension {
    pub fn comparison_operator(&self) -> std::option::Option<&str> {
        self.comparison_operator.as_deref()
    }
    pub fn value(&self) -> std::option::Option<f64> {
        self.value
    }
}
/// See [`MetricDimension`](crate::model::MetricDimension)
pub mod metric_dimension {
    /// A builder for [`MetricDimension`](crate::model::MetricDimension)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) comparison_operator: std::option::Option<std::string::String>,
        pub(crate) value: std::option::Option<f64>,
    }
    impl Builder {
        pub fn comparison_operator(mut self, input: impl Into<std::string::String>) -> Self {
            self.comparison_operator = Some(input.into());
            self
        }
        pub fn set_comparison_operator(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.comparison_operator = input;
            self
        }
        pub fn value(mut self, input: f64) -> Self {
            self.value = Some(input);
            self
        }
        pub fn set_value(mut self, input: std::option::Option<f64>) -> Self {
            self.value = input;
            self
        }
        /// Consumes the builder and constructs a [`MetricDimension`](crate::model::MetricDimension)
        pub fn build(self) -> crate::model::MetricDimension {
            crate::model::MetricDimension {
                comparison_operator: self.comparison_operator,
                value: self.value,
            }
        }
    }
}
impl MetricDimension {
    /// Creates a new builder-style object to manufacture [`MetricDimension`](crate::model::MetricDimension)
    pub fn builder() -> crate::model::metric_dimension::Builder {
        crate::model::metric_dimension::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct SegmentBehaviors {
    #[serde(rename = "Recency", skip_serializing_if = "Option::is_none")]
    pub recency: std::option::Option<crate::model::RecencyDimension>,
}
impl SegmentBehaviors {
    pub fn recency(&self) -> std::option::Option<&crate::model::RecencyDimension> {
        self.recency.as_ref()
    }
}
/// See [`SegmentBehaviors`](crate::model::SegmentBehaviors)
pub mod segment_behaviors {
    /// A builder for [`SegmentBehaviors`](crate::model::SegmentBehaviors)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) recency: std::option::Option<crate::model::RecencyDimension>,
    }
    impl Builder {
        pub fn recency(mut self, input: crate::model::RecencyDimension) -> Self {
            self.recency = Some(input);
            self
        }
        pub fn set_recency(mut self, input: std::option::Option<crate::model::RecencyDimension>) -> Self {
            self.recency = input;
            self
        }
        /// Consumes the builder and constructs a [`SegmentBehaviors`](crate::model::SegmentBehaviors)
        pub fn build(self) -> crate::model::SegmentBehaviors {
            crate::model::SegmentBehaviors {
                recency: self.recency,
            }
        }
    }
}
impl SegmentBehaviors {
    /// Creates a new builder-style object to manufacture [`SegmentBehaviors`](crate::model::SegmentBehaviors)
    pub fn builder() -> crate::model::segment_behaviors::Builder {
        crate::model::segment_behaviors::Builder::default()
    }
}

/// Specifies criteria for including or excluding endpoints from a segment based on how recently an
/// endpoint was active.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct RecencyDimension {
    #[serde(rename = "Duration", skip_serializing_if = "Option::is_none")]
    pub duration: std::option::Option<crate::model::Duration>,
    #[serde(rename = "RecencyType", skip_serializing_if = "Option::is_none")]
    pub recency_type: std::option::Option<crate::model::RecencyType>,
}
impl RecencyDimension {
    pub fn duration(&self) -> std::option::Option<&crate::model::Duration> {
        self.duration.as_ref()
    }
    pub fn recency_type(&self) -> std::option::Option<&crate::model::RecencyType> {
        self.recency_type.as_ref()
    }
}
/// See [`RecencyDimension`](crate::model::RecencyDimension)
pub mod recency_dimension {
    /// A builder for [`RecencyDimension`](crate::model::RecencyDimension)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) duration: std::option::Option<crate::model::Duration>,
        pub(crate) recency_type: std::option::Option<crate::model::RecencyType>,
    }
    impl Builder {
        pub fn duration(mut self, input: crate::model::Duration) -> Self {
            self.duration = Some(input);
            self
        }
        pub fn set_duration(mut self, input: std::option::Option<crate::model::Duration>) -> Self {
            self.duration = input;
            self
        }
        pub fn recency_type(mut self, input: crate::model::RecencyType) -> Self {
            self.recency_type = Some(input);
            self
        }
        pub fn set_recency_type(mut self, input: std::option::Option<crate::model::RecencyType>) -> Self {
            self.recency_type = input;
            self
        }
        /// Consumes the builder and constructs a [`RecencyDimension`](crate::model::RecencyDimension)
        pub fn build(self) -> crate::model::RecencyDimension {
            crate::model::RecencyDimension {
                duration: self.duration,
                recency_type: self.recency_type,
            }
        }
    }
}
impl RecencyDimension {
    /// Creates a new builder-style object to manufacture [`RecencyDimension`](crate::model::RecencyDimension)
    pub fn builder() -> crate::model::recency_dimension::Builder {
        crate::model::recency_dimension::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct SegmentDemographics {
    #[serde(rename = "AppVersion", skip_serializing_if = "Option::is_none")]
    pub app_version: std::option::Option<crate::model::SetDimension>,
    #[serde(rename = "Channel", skip_serializing_if = "Option::is_none")]
    pub channel: std::option::Option<crate::model::SetDimension>,
    #[serde(rename = "DeviceType", skip_serializing_if = "Option::is_none")]
    pub device_type: std::option::Option<crate::model::SetDimension>,
    #[serde(rename = "Make", skip_serializing_if = "Option::is_none")]
    pub make: std::option::Option<crate::model::SetDimension>,
    #[serde(rename = "Model", skip_serializing_if = "Option::is_none")]
    pub model: std::option::Option<crate::model::SetDimension>,
    #[serde(rename = "Platform", skip_serializing_if = "Option::is_none")]
    pub platform: std::option::Option<crate::model::SetDimension>,
}
impl SegmentDemographics {
    pub fn app_version(&self) -> std::option::Option<&crate::model::SetDimension> {
        self.app_version.as_ref()
    }
    pub fn channel(&self) -> std::option::Option<&crate::model::SetDimension> {
        self.channel.as_ref()
    }
    pub fn device_type(&self) -> std::option::Option<&crate::model::SetDimension> {
        self.device_type.as_ref()
    }
    pub fn make(&self) -> std::option::Option<&crate::model::SetDimension> {
        self.make.as_ref()
    }
    pub fn model(&self) -> std::option::Option<&crate::model::SetDimension> {
        self.model.as_ref()
    }
    pub fn platform(&self) -> std::option::Option<&crate::model::SetDimension> {
        self.platform.as_ref()
    }
}
/// See [`SegmentDemographics`](crate::model::SegmentDemographics)
pub mod segment_demographics {
    /// A builder for [`SegmentDemographics`](crate::model::SegmentDemographics)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) app_version: std::option::Option<crate::model::SetDimension>,
        pub(crate) channel: std::option::Option<crate::model::SetDimension>,
        pub(crate) device_type: std::option::Option<crate::model::SetDimension>,
        pub(crate) make: std::option::Option<crate::model::SetDimension>,
        pub(crate) model: std::option::Option<crate::model::SetDimension>,
        pub(crate) platform: std::option::Option<crate::model::SetDimension>,
    }
    impl Builder {
        pub fn app_version(mut self, input: crate::model::SetDimension) -> Self {
            self.app_version = Some(input);
            self
        }
        pub fn set_app_version(mut self, input: std::option::Option<crate::model::SetDimension>) -> Self {
            self.app_version = input;
            self
        }
        pub fn channel(mut self, input: crate::model::SetDimension) -> Self {
            self.channel = Some(input);
            self
        }
        pub fn set_channel(mut self, input: std::option::Option<crate::model::SetDimension>) -> Self {
            self.channel = input;
            self
        }
        pub fn device_type(mut self, input: crate::model::SetDimension) -> Self {
            self.device_type = Some(input);
            self
        }
        pub fn set_device_type(mut self, input: std::option::Option<crate::model::SetDimension>) -> Self {
            self.device_type = input;
            self
        }
        pub fn make(mut self, input: crate::model::SetDimension) -> Self {
            self.make = Some(input);
            self
        }
        pub fn set_make(mut self, input: std::option::Option<crate::model::SetDimension>) -> Self {
            self.make = input;
            self
        }
        pub fn model(mut self, input: crate::model::SetDimension) -> Self {
            self.model = Some(input);
            self
        }
        pub fn set_model(mut self, input: std::option::Option<crate::model::SetDimension>) -> Self {
            self.model = input;
            self
        }
        pub fn platform(mut self, input: crate::model::SetDimension) -> Self {
            self.platform = Some(input);
            self
        }
        pub fn set_platform(mut self, input: std::option::Option<crate::model::SetDimension>) -> Self {
            self.platform = input;
            self
        }
        /// Consumes the builder and constructs a [`SegmentDemographics`](crate::model::SegmentDemographics)
        pub fn build(self) -> crate::model::SegmentDemographics {
            crate::model::SegmentDemographics {
                app_version: self.app_version,
                channel: self.channel,
                device_type: self.device_type,
                make: self.make,
                model: self.model,
                platform: self.platform,
            }
        }
    }
}
impl SegmentDemographics {
    /// Creates a new builder-style object to manufacture [`SegmentDemographics`](crate::model::SegmentDemographics)
    pub fn builder() -> crate::model::segment_demographics::Builder {
        crate::model::segment_demographics::Builder::default()
    }
}

/// Specifies the dimension type and values for a segment dimension.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct SetDimension {
    #[serde(rename = "DimensionType", skip_serializing_if = "Option::is_none")]
    pub dimension_type: std::option::Option<crate::model::DimensionType>,
    #[serde(rename = "Values", skip_serializing_if = "Option::is_none")]
    pub values: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl SetDimension {
    pub fn dimension_type(&self) -> std::option::Option<&crate::model::DimensionType> {
        self.dimension_type.as_ref()
    }
    pub fn values(&self) -> std::option::Option<&[std::string::String]> {
        self.values.as_deref()
    }
}
/// See [`SetDimension`](crate::model::SetDimension)
pub mod set_dimension {
    /// A builder for [`SetDimension`](crate::model::SetDimension)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) dimension_type: std::option::Option<crate::model::DimensionType>,
        pub(crate) values: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        pub fn dimension_type(mut self, input: crate::model::DimensionType) -> Self {
            self.dimension_type = Some(input);
            self
        }
        pub fn set_dimension_type(mut self, input: std::option::Option<crate::model::DimensionType>) -> Self {
            self.dimension_type = input;
            self
        }
        /// Appends an item to `values`.
        ///
        /// To override the contents of this collection use [`set_values`](Self::set_values).
        pub fn values(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.values.unwrap_or_default();
            v.push(input.into());
            self.values = Some(v);
            self
        }
        pub fn set_values(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.values = input;
            self
        }
        /// Consumes the builder and constructs a [`SetDimension`](crate::model::SetDimension)
        pub fn build(self) -> crate::model::SetDimension {
            crate::model::SetDimension {
                dimension_type: self.dimension_type,
                values: self.values,
            }
        }
    }
}
impl SetDimension {
    /// Creates a new builder-style object to manufacture [`SetDimension`](crate::model::SetDimension)
    pub fn builder() -> crate::model::set_dimension::Builder {
        crate::model::set_dimension::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct SegmentLocation {
    #[serde(rename = "Country", skip_serializing_if = "Option::is_none")]
    pub country: std::option::Option<crate::model::SetDimension>,
    #[serde(rename = "GPSPoint", skip_serializing_if = "Option::is_none")]
    pub gps_point: std::option::Option<crate::model::GpsPointDimension>,
}
impl SegmentLocation {
    pub fn country(&self) -> std::option::Option<&crate::model::SetDimension> {
        self.country.as_ref()
    }
    pub fn gps_point(&self) -> std::option::Option<&crate::model::GpsPointDimension> {
        self.gps_point.as_ref()
    }
}
/// See [`SegmentLocation`](crate::model::SegmentLocation)
pub mod segment_location {
    /// A builder for [`SegmentLocation`](crate::model::SegmentLocation)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) country: std::option::Option<crate::model::SetDimension>,
        pub(crate) gps_point: std::option::Option<crate::model::GpsPointDimension>,
    }
    impl Builder {
        pub fn country(mut self, input: crate::model::SetDimension) -> Self {
            self.country = Some(input);
            self
        }
        pub fn set_country(mut self, input: std::option::Option<crate::model::SetDimension>) -> Self {
            self.country = input;
            self
        }
        pub fn gps_point(mut self, input: crate::model::GpsPointDimension) -> Self {
            self.gps_point = Some(input);
            self
        }
        pub fn set_gps_point(mut self, input: std::option::Option<crate::model::GpsPointDimension>) -> Self {
            self.gps_point = input;
            self
        }
        /// Consumes the builder and constructs a [`SegmentLocation`](crate::model::SegmentLocation)
        pub fn build(self) -> crate::model::SegmentLocation {
            crate::model::SegmentLocation {
                country: self.country,
                gps_point: self.gps_point,
            }
        }
    }
}
impl SegmentLocation {
    /// Creates a new builder-style object to manufacture [`SegmentLocation`](crate::model::SegmentLocation)
    pub fn builder() -> crate::model::segment_location::Builder {
        crate::model::segment_location::Builder::default()
    }
}

/// Specifies GPS-based criteria for including or excluding endpoints from a segment.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct GpsPointDimension {
    #[serde(rename = "Coordinates", skip_serializing_if = "Option::is_none")]
    pub coordinates: std::option::Option<crate::model::GpsCoordinates>,
    #[serde(rename = "RangeInKilometers", skip_serializing_if = "Option::is_none")]
    pub range_in_kilometers: std::option::Option<f64>,
}
impl GpsPointDimension {
    pub fn coordinates(&self) -> std::option::Option<&crate::model::GpsCoordinates> {
        self.coordinates.as_ref()
    }
    pub fn range_in_kilometers(&self) -> std::option::Option<f64> {
        self.range_in_kilometers
    }
}
/// See [`GpsPointDimension`](crate::model::GpsPointDimension)
pub mod gps_point_dimension {
    /// A builder for [`GpsPointDimension`](crate::model::GpsPointDimension)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) coordinates: std::option::Option<crate::model::GpsCoordinates>,
        pub(crate) range_in_kilometers: std::option::Option<f64>,
    }
    impl Builder {
        pub fn coordinates(mut self, input: crate::model::GpsCoordinates) -> Self {
            self.coordinates = Some(input);
            self
        }
        pub fn set_coordinates(mut self, input: std::option::Option<crate::model::GpsCoordinates>) -> Self {
            self.coordinates = input;
            self
        }
        pub fn range_in_kilometers(mut self, input: f64) -> Self {
            self.range_in_kilometers = Some(input);
            self
        }
        pub fn set_range_in_kilometers(mut self, input: std::option::Option<f64>) -> Self {
            self.range_in_kilometers = input;
            self
        }
        /// Consumes the builder and constructs a [`GpsPointDimension`](crate::model::GpsPointDimension)
        pub fn build(self) -> crate::model::GpsPointDimension {
            crate::model::GpsPointDimension {
                coordinates: self.coordinates,
                range_in_kilometers: self.range_in_kilometers,
            }
        }
    }
}
impl GpsPointDimension {
    /// Creates a new builder-style object to manufacture [`GpsPointDimension`](crate::model::GpsPointDimension)
    pub fn builder() -> crate::model::gps_point_dimension::Builder {
        crate::model::gps_point_dimension::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct GpsCoordinates {
    #[serde(rename = "Latitude", skip_serializing_if = "Option::is_none")]
    pub latitude: std::option::Option<f64>,
    #[serde(rename = "Longitude", skip_serializing_if = "Option::is_none")]
    pub longitude: std::option::Option<f64>,
}
impl GpsCoordinates {
    pub fn latitude(&self) -> std::option::Option<f64> {
        self.latitude
    }
    pub fn longitude(&self) -> std::option::Option<f64> {
        self.longitude
    }
}
/// See [`GpsCoordinates`](crate::model::GpsCoordinates)
pub mod gps_coordinates {
    /// A builder for [`GpsCoordinates`](crate::model::GpsCoordinates)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) latitude: std::option::Option<f64>,
        pub(crate) longitude: std::option::Option<f64>,
    }
    impl Builder {
        pub fn latitude(mut self, input: f64) -> Self {
            self.latitude = Some(input);
            self
        }
        pub fn set_latitude(mut self, input: std::option::Option<f64>) -> Self {
            self.latitude = input;
            self
        }
        pub fn longitude(mut self, input: f64) -> Self {
            self.longitude = Some(input);
            self
        }
        pub fn set_longitude(mut self, input: std::option::Option<f64>) -> Self {
            self.longitude = input;
            self
        }
        /// Consumes the builder and constructs a [`GpsCoordinates`](crate::model::GpsCoordinates)
        pub fn build(self) -> crate::model::GpsCoordinates {
            crate::model::GpsCoordinates {
                latitude: self.latitude,
                longitude: self.longitude,
            }
        }
    }
}
impl GpsCoordinates {
    /// Creates a new builder-style object to manufacture [`GpsCoordinates`](crate::model::GpsCoordinates)
    pub fn builder() -> crate::model::gps_coordinates::Builder {
        crate::model::gps_coordinates::Builder::default()
    }
}

/// Provides information about the import job that created a segment.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct SegmentImportResource {
    #[serde(rename = "ChannelCounts", skip_serializing_if = "Option::is_none")]
    pub channel_counts: std::option::Option<std::collections::HashMap<std::string::String, i32>>,
    #[serde(rename = "ExternalId", skip_serializing_if = "Option::is_none")]
    pub external_id: std::option::Option<std::string::String>,
    #[serde(rename = "Format", skip_serializing_if = "Option::is_none")]
    pub format: std::option::Option<crate::model::Format>,
    #[serde(rename = "RoleArn", skip_serializing_if = "Option::is_none")]
    pub role_arn: std::option::Option<std::string::String>,
    #[serde(rename = "S3Url", skip_serializing_if = "Option::is_none")]
    pub s3_url: std::option::Option<std::string::String>,
    #[serde(rename = "Size", skip_serializing_if = "Option::is_none")]
    pub size: std::option::Option<i32>,
}
impl SegmentImportResource {
    pub fn channel_counts(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, i32>> {
        self.channel_counts.as_ref()
    }
    pub fn external_id(&self) -> std::option::Option<&str> {
        self.external_id.as_deref()
    }
    pub fn format(&self) -> std::option::Option<&crate::model::Format> {
        self.format.as_ref()
    }
    pub fn role_arn(&self) -> std::option::Option<&str> {
        self.role_arn.as_deref()
    }
    pub fn s3_url(&self) -> std::option::Option<&str> {
        self.s3_url.as_deref()
    }
    pub fn size(&self) -> std::option::Option<i32> {
        self.size
    }
}
/// See [`SegmentImportResource`](crate::model::SegmentImportResource)
pub mod segment_import_resource {
    /// A builder for [`SegmentImportResource`](crate::model::SegmentImportResource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) channel_counts: std::option::Option<std::collections::HashMap<std::string::String, i32>>,
        pub(crate) external_id: std::option::Option<std::string::String>,
        pub(crate) format: std::option::Option<crate::model::Format>,
        pub(crate) role_arn: std::option::Option<std::string::String>,
        pub(crate) s3_url: std::option::Option<std::string::String>,
        pub(crate) size: std::option::Option<i32>,
    }
    impl Builder {
        /// Adds a key-value pair to `channel_counts`.
        ///
        /// To override the contents of this collection use [`set_channel_counts`](Self::set_channel_counts).
        pub fn channel_counts(
            mut self,
            k: impl Into<std::string::String>,
            v: i32,
        ) -> Self {
            let mut hash_map = self.channel_counts.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.channel_counts = Some(hash_map);
            self
        }
        pub fn set_channel_counts(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, i32>>) -> Self {
            self.channel_counts = input;
            self
        }
        pub fn external_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.external_id = Some(input.into());
            self
        }
        pub fn set_external_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.external_id = input;
            self
        }
        pub fn format(mut self, input: crate::model::Format) -> Self {
            self.format = Some(input);
            self
        }
        pub fn set_format(mut self, input: std::option::Option<crate::model::Format>) -> Self {
            self.format = input;
            self
        }
        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.role_arn = Some(input.into());
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.role_arn = input;
            self
        }
        pub fn s3_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.s3_url = Some(input.into());
            self
        }
        pub fn set_s3_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.s3_url = input;
            self
        }
        pub fn size(mut self, input: i32) -> Self {
            self.size = Some(input);
            self
        }
        pub fn set_size(mut self, input: std::option::Option<i32>) -> Self {
            self.size = input;
            self
        }
        /// Consumes the builder and constructs a [`SegmentImportResource`](crate::model::SegmentImportResource)
        pub fn build(self) -> crate::model::SegmentImportResource {
            crate::model::SegmentImportResource {
                channel_counts: self.channel_counts,
                external_id: self.external_id,
                format: self.format,
                role_arn: self.role_arn,
                s3_url: self.s3_url,
                size: self.size,
            }
        }
    }
}
impl SegmentImportResource {
    /// Creates a new builder-style object to manufacture [`SegmentImportResource`](crate::model::SegmentImportResource)
    pub fn builder() -> crate::model::segment_import_resource::Builder {
        crate::model::segment_import_resource::Builder::default()
    }
}

/// Specifies the configuration and other settings for a message.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct MessageRequest {
    /// A map of key-value pairs, where each key is an address and each value is an
    /// [`AddressConfiguration`](crate::model::AddressConfiguration) object.
    #[serde(rename = "Addresses", skip_serializing_if = "Option::is_none")]
    pub addresses: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AddressConfiguration>>,
    #[serde(rename = "Context", skip_serializing_if = "Option::is_none")]
    pub context: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "Endpoints", skip_serializing_if = "Option::is_none")]
    pub endpoints: std::option::Option<std::collections::HashMap<std::string::String, crate::model::EndpointSendConfiguration>>,
    #[serde(rename = "MessageConfiguration", skip_serializing_if = "Option::is_none")]
    pub message_configuration: std::option::Option<crate::model::DirectMessageConfiguration>,
    #[serde(rename = "TraceId", skip_serializing_if = "Option::is_none")]
    pub trace_id: std::option::Option<std::string::String>,
}
impl MessageRequest {
    pub fn addresses(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, crate::model::AddressConfiguration>> {
        self.addresses.as_ref()
    }
    pub fn context(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.context.as_ref()
    }
    pub fn endpoints(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, crate::model::EndpointSendConfiguration>> {
        self.endpoints.as_ref()
    }
    pub fn message_configuration(&self) -> std::option::Option<&crate::model::DirectMessageConfiguration> {
        self.message_configuration.as_ref()
    }
    pub fn trace_id(&self) -> std::option::Option<&str> {
        self.trace_id.as_deref()
    }
}
/// See [`MessageRequest`](crate::model::MessageRequest)
pub mod message_request {
    /// A builder for [`MessageRequest`](crate::model::MessageRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) addresses: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AddressConfiguration>>,
        pub(crate) context: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) endpoints: std::option::Option<std::collections::HashMap<std::string::String, crate::model::EndpointSendConfiguration>>,
        pub(crate) message_configuration: std::option::Option<crate::model::DirectMessageConfiguration>,
        pub(crate) trace_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Adds a key-value pair to `addresses`.
        ///
        /// To override the contents of this collection use [`set_addresses`](Self::set_addresses).
        pub fn addresses(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AddressConfiguration>,
        ) -> Self {
            let mut hash_map = self.addresses.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.addresses = Some(hash_map);
            self
        }
        pub fn set_addresses(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AddressConfiguration>>) -> Self {
            self.addresses = input;
            self
        }
        /// Adds a key-value pair to `context`.
        ///
        /// To override the contents of this collection use [`set_context`](Self::set_context).
        pub fn context(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.context.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.context = Some(hash_map);
            self
        }
        pub fn set_context(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.context = input;
            self
        }
        /// Adds a key-value pair to `endpoints`.
        ///
        /// To override the contents of this collection use [`set_endpoints`](Self::set_endpoints).
        pub fn endpoints(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::EndpointSendConfiguration>,
        ) -> Self {
            let mut hash_map = self.endpoints.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.endpoints = Some(hash_map);
            self
        }
        pub fn set_endpoints(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, crate::model::EndpointSendConfiguration>>) -> Self {
            self.endpoints = input;
            self
        }
        pub fn message_configuration(mut self, input: crate::model::DirectMessageConfiguration) -> Self {
            self.message_configuration = Some(input);
            self
        }
        pub fn set_message_configuration(mut self, input: std::option::Option<crate::model::DirectMessageConfiguration>) -> Self {
            self.message_configuration = input;
            self
        }
        pub fn trace_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.trace_id = Some(input.into());
            self
        }
        pub fn set_trace_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.trace_id = input;
            self
        }
        /// Consumes the builder and constructs a [`MessageRequest`](crate::model::MessageRequest)
        pub fn build(self) -> crate::model::MessageRequest {
            crate::model::MessageRequest {
                addresses: self.addresses,
                context: self.context,
                endpoints: self.endpoints,
                message_configuration: self.message_configuration,
                trace_id: self.trace_id,
            }
        }
    }
}
impl MessageRequest {
    /// Creates a new builder-style object to manufacture [`MessageRequest`](crate::model::MessageRequest)
    pub fn builder() -> crate::model::message_request::Builder {
        crate::model::message_request::Builder::default()
    }
}

/// Specifies address-based configuration settings for a message that's sent directly to an
/// endpoint.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct AddressConfiguration {
    #[serde(rename = "BodyOverride", skip_serializing_if = "Option::is_none")]
    pub body_override: std::option::Option<std::string::String>,
    #[serde(rename = "ChannelType", skip_serializing_if = "Option::is_none")]
    pub channel_type: std::option::Option<crate::model::ChannelType>,
    #[serde(rename = "Context", skip_serializing_if = "Option::is_none")]
    pub context: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "RawContent", skip_serializing_if = "Option::is_none")]
    pub raw_content: std::option::Option<std::string::String>,
    #[serde(rename = "Substitutions", skip_serializing_if = "Option::is_none")]
    pub substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
    #[serde(rename = "TitleOverride", skip_serializing_if = "Option::is_none")]
    pub title_override: std::option::Option<std::string::String>,
}
impl AddressConfiguration {
    pub fn body_override(&self) -> std::option::Option<&str> {
        self.body_override.as_deref()
    }
    pub fn channel_type(&self) -> std::option::Option<&crate::model::ChannelType> {
        self.channel_type.as_ref()
    }
    pub fn context(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.context.as_ref()
    }
    pub fn raw_content(&self) -> std::option::Option<&str> {
        self.raw_content.as_deref()
    }
    pub fn substitutions(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>> {
        self.substitutions.as_ref()
    }
    pub fn title_override(&self) -> std::option::Option<&str> {
        self.title_override.as_deref()
    }
}
/// See [`AddressConfiguration`](crate::model::AddressConfiguration)
pub mod address_configuration {
    /// A builder for [`AddressConfiguration`](crate::model::AddressConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) body_override: std::option::Option<std::string::String>,
        pub(crate) channel_type: std::option::Option<crate::model::ChannelType>,
        pub(crate) context: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) raw_content: std::option::Option<std::string::String>,
        pub(crate) substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
        pub(crate) title_override: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn body_override(mut self, input: impl Into<std::string::String>) -> Self {
            self.body_override = Some(input.into());
            self
        }
        pub fn set_body_override(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.body_override = input;
            self
        }
        pub fn channel_type(mut self, input: crate::model::ChannelType) -> Self {
            self.channel_type = Some(input);
            self
        }
        pub fn set_channel_type(mut self, input: std::option::Option<crate::model::ChannelType>) -> Self {
            self.channel_type = input;
            self
        }
        /// Adds a key-value pair to `context`.
        ///
        /// To override the contents of this collection use [`set_context`](Self::set_context).
        pub fn context(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.context.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.context = Some(hash_map);
            self
        }
        pub fn set_context(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.context = input;
            self
        }
        pub fn raw_content(mut self, input: impl Into<std::string::String>) -> Self {
            self.raw_content = Some(input.into());
            self
        }
        pub fn set_raw_content(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.raw_content = input;
            self
        }
        /// Adds a key-value pair to `substitutions`.
        ///
        /// To override the contents of this collection use [`set_substitutions`](Self::set_substitutions).
        pub fn substitutions(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<std::string::String>>,
        ) -> Self {
            let mut hash_map = self.substitutions.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.substitutions = Some(hash_map);
            self
        }
        pub fn set_substitutions(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>) -> Self {
            self.substitutions = input;
            self
        }
        pub fn title_override(mut self, input: impl Into<std::string::String>) -> Self {
            self.title_override = Some(input.into());
            self
        }
        pub fn set_title_override(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.title_override = input;
            self
        }
        /// Consumes the builder and constructs a [`AddressConfiguration`](crate::model::AddressConfiguration)
        pub fn build(self) -> crate::model::AddressConfiguration {
            crate::model::AddressConfiguration {
                body_override: self.body_override,
                channel_type: self.channel_type,
                context: self.context,
                raw_content: self.raw_content,
                substitutions: self.substitutions,
                title_override: self.title_override,
            }
        }
    }
}
impl AddressConfiguration {
    /// Creates a new builder-style object to manufacture [`AddressConfiguration`](crate::model::AddressConfiguration)
    pub fn builder() -> crate::model::address_configuration::Builder {
        crate::model::address_configuration::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct EndpointSendConfiguration {
    #[serde(rename = "BodyOverride", skip_serializing_if = "Option::is_none")]
    pub body_override: std::option::Option<std::string::String>,
    #[serde(rename = "Context", skip_serializing_if = "Option::is_none")]
    pub context: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "RawContent", skip_serializing_if = "Option::is_none")]
    pub raw_content: std::option::Option<std::string::String>,
    #[serde(rename = "Substitutions", skip_serializing_if = "Option::is_none")]
    pub substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
    #[serde(rename = "TitleOverride", skip_serializing_if = "Option::is_none")]
    pub title_override: std::option::Option<std::string::String>,
}
impl EndpointSendConfiguration {
    pub fn body_override(&self) -> std::option::Option<&str> {
        self.body_override.as_deref()
    }
    pub fn context(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.context.as_ref()
    }
    pub fn raw_content(&self) -> std::option::Option<&str> {
        self.raw_content.as_deref()
    }
    pub fn substitutions(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>> {
        self.substitutions.as_ref()
    }
    pub fn title_override(&self) -> std::option::Option<&str> {
        self.title_override.as_deref()
    }
}
/// See [`EndpointSendConfiguration`](crate::model::EndpointSendConfiguration)
pub mod endpoint_send_configuration {
    /// A builder for [`EndpointSendConfiguration`](crate::model::EndpointSendConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) body_override: std::option::Option<std::string::String>,
        pub(crate) context: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) raw_content: std::option::Option<std::string::String>,
        pub(crate) substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
        pub(crate) title_override: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn body_override(mut self, input: impl Into<std::string::String>) -> Self {
            self.body_override = Some(input.into());
            self
        }
        pub fn set_body_override(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.body_override = input;
            self
        }
        /// Adds a key-value pair to `context`.
        ///
        /// To override the contents of this collection use [`set_context`](Self::set_context).
        pub fn context(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.context.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.context = Some(hash_map);
            self
        }
        pub fn set_context(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.context = input;
            self
        }
        pub fn raw_content(mut self, input: impl Into<std::string::String>) -> Self {
            self.raw_content = Some(input.into());
            self
        }
        pub fn set_raw_content(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.raw_content = input;
            self
        }
        /// Adds a key-value pair to `substitutions`.
        ///
        /// To override the contents of this collection use [`set_substitutions`](Self::set_substitutions).
        pub fn substitutions(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<std::string::String>>,
        ) -> Self {
            let mut hash_map = self.substitutions.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.substitutions = Some(hash_map);
            self
        }
        pub fn set_substitutions(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>) -> Self {
            self.substitutions = input;
            self
        }
        pub fn title_override(mut self, input: impl Into<std::string::String>) -> Self {
            self.title_override = Some(input.into());
            self
        }
        pub fn set_title_override(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.title_override = input;
            self
        }
        /// Consumes the builder and constructs a [`EndpointSendConfiguration`](crate::model::EndpointSendConfiguration)
        pub fn build(self) -> crate::model::EndpointSendConfiguration {
            crate::model::EndpointSendConfiguration {
                body_override: self.body_override,
                context: self.context,
                raw_content: self.raw_content,
                substitutions: self.substitutions,
                title_override: self.title_override,
            }
        }
    }
}
impl EndpointSendConfiguration {
    /// Creates a new builder-style object to manufacture [`EndpointSendConfiguration`](crate::model::EndpointSendConfiguration)
    pub fn builder() -> crate::model::endpoint_send_configuration::Builder {
        crate::model::endpoint_send_configuration::Builder::default()
    }
}

/// Specifies the settings and content for the default message and any default messages that you
/// tailored for specific channels.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct DirectMessageConfiguration {
    #[serde(rename = "APNSMessage", skip_serializing_if = "Option::is_none")]
    pub apns_message: std::option::Option<crate::model::ApnsMessage>,
    #[serde(rename = "DefaultMessage", skip_serializing_if = "Option::is_none")]
    pub default_message: std::option::Option<crate::model::DefaultMessage>,
    #[serde(rename = "DefaultPushNotificationMessage", skip_serializing_if = "Option::is_none")]
    pub default_push_notification_message: std::option::Option<crate::model::DefaultPushNotificationMessage>,
    #[serde(rename = "GCMMessage", skip_serializing_if = "Option::is_none")]
    pub gcm_message: std::option::Option<crate::model::GcmMessage>,
    #[serde(rename = "SMSMessage", skip_serializing_if = "Option::is_none")]
    pub sms_message: std::option::Option<crate::model::SmsMessage>,
}
impl DirectMessageConfiguration {
    pub fn apns_message(&self) -> std::option::Option<&crate::model::ApnsMessage> {
        self.apns_message.as_ref()
    }
    pub fn default_message(&self) -> std::option::Option<&crate::model::DefaultMessage> {
        self.default_message.as_ref()
    }
    pub fn default_push_notification_message(&self) -> std::option::Option<&crate::model::DefaultPushNotificationMessage> {
        self.default_push_notification_message.as_ref()
    }
    pub fn gcm_message(&self) -> std::option::Option<&crate::model::GcmMessage> {
        self.gcm_message.as_ref()
    }
    pub fn sms_message(&self) -> std::option::Option<&crate::model::SmsMessage> {
        self.sms_message.as_ref()
    }
}
/// See [`DirectMessageConfiguration`](crate::model::DirectMessageConfiguration)
pub mod direct_message_configuration {
    /// A builder for [`DirectMessageConfiguration`](crate::model::DirectMessageConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) apns_message: std::option::Option<crate::model::ApnsMessage>,
        pub(crate) default_message: std::option::Option<crate::model::DefaultMessage>,
        pub(crate) default_push_notification_message: std::option::Option<crate::model::DefaultPushNotificationMessage>,
        pub(crate) gcm_message: std::option::Option<crate::model::GcmMessage>,
        pub(crate) sms_message: std::option::Option<crate::model::SmsMessage>,
    }
    impl Builder {
        pub fn apns_message(mut self, input: crate::model::ApnsMessage) -> Self {
            self.apns_message = Some(input);
            self
        }
        pub fn set_apns_message(mut self, input: std::option::Option<crate::model::ApnsMessage>) -> Self {
            self.apns_message = input;
            self
        }
        pub fn default_message(mut self, input: crate::model::DefaultMessage) -> Self {
            self.default_message = Some(input);
            self
        }
        pub fn set_default_message(mut self, input: std::option::Option<crate::model::DefaultMessage>) -> Self {
            self.default_message = input;
            self
        }
        pub fn default_push_notification_message(mut self, input: crate::model::DefaultPushNotificationMessage) -> Self {
            self.default_push_notification_message = Some(input);
            self
        }
        pub fn set_default_push_notification_message(mut self, input: std::option::Option<crate::model::DefaultPushNotificationMessage>) -> Self {
            self.default_push_notification_message = input;
            self
        }
        pub fn gcm_message(mut self, input: crate::model::GcmMessage) -> Self {
            self.gcm_message = Some(input);
            self
        }
        pub fn set_gcm_message(mut self, input: std::option::Option<crate::model::GcmMessage>) -> Self {
            self.gcm_message = input;
            self
        }
        pub fn sms_message(mut self, input: crate::model::SmsMessage) -> Self {
            self.sms_message = Some(input);
            self
        }
        pub fn set_sms_message(mut self, input: std::option::Option<crate::model::SmsMessage>) -> Self {
            self.sms_message = input;
            self
        }
        /// Consumes the builder and constructs a [`DirectMessageConfiguration`](crate::model::DirectMessageConfiguration)
        pub fn build(self) -> crate::model::DirectMessageConfiguration {
            crate::model::DirectMessageConfiguration {
                apns_message: self.apns_message,
                default_message: self.default_message,
                default_push_notification_message: self.default_push_notification_message,
                gcm_message: self.gcm_message,
                sms_message: self.sms_message,
            }
        }
    }
}
impl DirectMessageConfiguration {
    /// Creates a new builder-style object to manufacture [`DirectMessageConfiguration`](crate::model::DirectMessageConfiguration)
    pub fn builder() -> crate::model::direct_message_configuration::Builder {
        crate::model::direct_message_configuration::Builder::default()
    }
}

/// Specifies the settings for a one-time message that's sent directly to an endpoint through the
/// GCM channel.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct GcmMessage {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub action: std::option::Option<crate::model::Action>,
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub body: std::option::Option<std::string::String>,
    /// An arbitrary string that identifies a group of messages that can be collapsed to ensure that
    /// only the last message is sent when delivery can resume.
    #[serde(rename = "CollapseKey", skip_serializing_if = "Option::is_none")]
    pub collapse_key: std::option::Option<std::string::String>,
    #[serde(rename = "Data", skip_serializing_if = "Option::is_none")]
    pub data: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "IconReference", skip_serializing_if = "Option::is_none")]
    pub icon_reference: std::option::Option<std::string::String>,
    #[serde(rename = "ImageIconUrl", skip_serializing_if = "Option::is_none")]
    pub image_icon_url: std::option::Option<std::string::String>,
    #[serde(rename = "ImageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: std::option::Option<std::string::String>,
    /// The priority of the notification, `normal` or `high`.
    #[serde(rename = "Priority", skip_serializing_if = "Option::is_none")]
    pub priority: std::option::Option<std::string::String>,
    /// The raw, JSON-formatted string to use as the payload for the notification message. If
    /// specified, this value overrides all other content for the message.
    #[serde(rename = "RawContent", skip_serializing_if = "Option::is_none")]
    pub raw_content: std::option::Option<std::string::String>,
    #[serde(rename = "RestrictedPackageName", skip_serializing_if = "Option::is_none")]
    pub restricted_package_name: std::option::Option<std::string::String>,
    #[serde(rename = "SilentPush", skip_serializing_if = "Option::is_none")]
    pub silent_push: std::option::Option<bool>,
    #[serde(rename = "SmallImageIconUrl", skip_serializing_if = "Option::is_none")]
    pub small_image_icon_url: std::option::Option<std::string::String>,
    #[serde(rename = "Sound", skip_serializing_if = "Option::is_none")]
    pub sound: std::option::Option<std::string::String>,
    #[serde(rename = "Substitutions", skip_serializing_if = "Option::is_none")]
    pub substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
    /// The amount of time, in seconds, that FCM should store and attempt to deliver the push
    /// notification, if the service is unavailable and the device is offline.
    #[serde(rename = "TimeToLive", skip_serializing_if = "Option::is_none")]
    pub time_to_live: std::option::Option<i32>,
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: std::option::Option<std::string::String>,
    #[serde(rename = "Url", skip_serializing_if = "Option::is_none")]
    pub url: std::option::Option<std::string::String>,
}
impl GcmMessage {
    pub fn action(&self) -> std::option::Option<&crate::model::Action> {
        self.action.as_ref()
    }
    pub fn body(&self) -> std::option::Option<&str> {
        self.body.as_deref()
    }
    pub fn collapse_key(&self) -> std::option::Option<&str> {
        self.collapse_key.as_deref()
    }
    pub fn data(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.data.as_ref()
    }
    pub fn icon_reference(&self) -> std::option::Option<&str> {
        self.icon_reference.as_deref()
    }
    pub fn image_icon_url(&self) -> std::option::Option<&str> {
        self.image_icon_url.as_deref()
    }
    pub fn image_url(&self) -> std::option::Option<&str> {
        self.image_url.as_deref()
    }
    pub fn priority(&self) -> std::option::Option<&str> {
        self.priority.as_deref()
    }
    pub fn raw_content(&self) -> std::option::Option<&str> {
        self.raw_content.as_deref()
    }
    pub fn restricted_package_name(&self) -> std::option::Option<&str> {
        self.restricted_package_name.as_deref()
    }
    pub fn silent_push(&self) -> std::option::Option<bool> {
        self.silent_push
    }
    pub fn small_image_icon_url(&self) -> std::option::Option<&str> {
        self.small_image_icon_url.as_deref()
    }
    pub fn sound(&self) -> std::option::Option<&str> {
        self.sound.as_deref()
    }
    pub fn substitutions(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>> {
        self.substitutions.as_ref()
    }
    pub fn time_to_live(&self) -> std::option::Option<i32> {
        self.time_to_live
    }
    pub fn title(&self) -> std::option::Option<&str> {
        self.title.as_deref()
    }
    pub fn url(&self) -> std::option::Option<&str> {
        self.url.as_deref()
    }
}
/// See [`GcmMessage`](crate::model::GcmMessage)
pub mod gcm_message {
    /// A builder for [`GcmMessage`](crate::model::GcmMessage)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) action: std::option::Option<crate::model::Action>,
        pub(crate) body: std::option::Option<std::string::String>,
        pub(crate) collapse_key: std::option::Option<std::string::String>,
        pub(crate) data: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) icon_reference: std::option::Option<std::string::String>,
        pub(crate) image_icon_url: std::option::Option<std::string::String>,
        pub(crate) image_url: std::option::Option<std::string::String>,
        pub(crate) priority: std::option::Option<std::string::String>,
        pub(crate) raw_content: std::option::Option<std::string::String>,
        pub(crate) restricted_package_name: std::option::Option<std::string::String>,
        pub(crate) silent_push: std::option::Option<bool>,
        pub(crate) small_image_icon_url: std::option::Option<std::string::String>,
        pub(crate) sound: std::option::Option<std::string::String>,
        pub(crate) substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
        pub(crate) time_to_live: std::option::Option<i32>,
        pub(crate) title: std::option::Option<std::string::String>,
        pub(crate) url: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn action(mut self, input: crate::model::Action) -> Self {
            self.action = Some(input);
            self
        }
        pub fn set_action(mut self, input: std::option::Option<crate::model::Action>) -> Self {
            self.action = input;
            self
        }
        pub fn body(mut self, input: impl Into<std::string::String>) -> Self {
            self.body = Some(input.into());
            self
        }
        pub fn set_body(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.body = input;
            self
        }
        pub fn collapse_key(mut self, input: impl Into<std::string::String>) -> Self {
            self.collapse_key = Some(input.into());
            self
        }
        pub fn set_collapse_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.collapse_key = input;
            self
        }
        /// Adds a key-value pair to `data`.
        ///
        /// To override the contents of this collection use [`set_data`](Self::set_data).
        pub fn data(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.data.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.data = Some(hash_map);
            self
        }
        pub fn set_data(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.data = input;
            self
        }
        pub fn icon_reference(mut self, input: impl Into<std::string::String>) -> Self {
            self.icon_reference = Some(input.into());
            self
        }
        pub fn set_icon_reference(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.icon_reference = input;
            self
        }
        pub fn image_icon_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_icon_url = Some(input.into());
            self
        }
        pub fn set_image_icon_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_icon_url = input;
            self
        }
        pub fn image_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_url = Some(input.into());
            self
        }
        pub fn set_image_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_url = input;
            self
        }
        pub fn priority(mut self, input: impl Into<std::string::String>) -> Self {
            self.priority = Some(input.into());
            self
        }
        pub fn set_priority(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.priority = input;
            self
        }
        pub fn raw_content(mut self, input: impl Into<std::string::String>) -> Self {
            self.raw_content = Some(input.into());
            self
        }
        pub fn set_raw_content(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.raw_content = input;
            self
        }
        pub fn restricted_package_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.restricted_package_name = Some(input.into());
            self
        }
        pub fn set_restricted_package_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.restricted_package_name = input;
            self
        }
        pub fn silent_push(mut self, input: bool) -> Self {
            self.silent_push = Some(input);
            self
        }
        pub fn set_silent_push(mut self, input: std::option::Option<bool>) -> Self {
            self.silent_push = input;
            self
        }
        pub fn small_image_icon_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.small_image_icon_url = Some(input.into());
            self
        }
        pub fn set_small_image_icon_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.small_image_icon_url = input;
            self
        }
        pub fn sound(mut self, input: impl Into<std::string::String>) -> Self {
            self.sound = Some(input.into());
            self
        }
        pub fn set_sound(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.sound = input;
            self
        }
        /// Adds a key-value pair to `substitutions`.
        ///
        /// To override the contents of this collection use [`set_substitutions`](Self::set_substitutions).
        pub fn substitutions(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<std::string::String>>,
        ) -> Self {
            let mut hash_map = self.substitutions.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.substitutions = Some(hash_map);
            self
        }
        pub fn set_substitutions(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>) -> Self {
            self.substitutions = input;
            self
        }
        pub fn time_to_live(mut self, input: i32) -> Self {
            self.time_to_live = Some(input);
            self
        }
        pub fn set_time_to_live(mut self, input: std::option::Option<i32>) -> Self {
            self.time_to_live = input;
            self
        }
        pub fn title(mut self, input: impl Into<std::string::String>) -> Self {
            self.title = Some(input.into());
            self
        }
        pub fn set_title(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.title = input;
            self
        }
        pub fn url(mut self, input: impl Into<std::string::String>) -> Self {
            self.url = Some(input.into());
            self
        }
        pub fn set_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.url = input;
            self
        }
        /// Consumes the builder and constructs a [`GcmMessage`](crate::model::GcmMessage)
        pub fn build(self) -> crate::model::GcmMessage {
            crate::model::GcmMessage {
                action: self.action,
                body: self.body,
                collapse_key: self.collapse_key,
                data: self.data,
                icon_reference: self.icon_reference,
                image_icon_url: self.image_icon_url,
                image_url: self.image_url,
                priority: self.priority,
                raw_content: self.raw_content,
                restricted_package_name: self.restricted_package_name,
                silent_push: self.silent_push,
                small_image_icon_url: self.small_image_icon_url,
                sound: self.sound,
                substitutions: self.substitutions,
                time_to_live: self.time_to_live,
                title: self.title,
                url: self.url,
            }
        }
    }
}
impl GcmMessage {
    /// Creates a new builder-style object to manufacture [`GcmMessage`](crate::model::GcmMessage)
    pub fn builder() -> crate::model::gcm_message::Builder {
        crate::model::gcm_message::Builder::default()
    }
}

/// Specifies the settings for a one-time message that's sent directly to an endpoint through the
/// APNs channel.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct ApnsMessage {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub action: std::option::Option<crate::model::Action>,
    #[serde(rename = "Badge", skip_serializing_if = "Option::is_none")]
    pub badge: std::option::Option<i32>,
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub body: std::option::Option<std::string::String>,
    #[serde(rename = "Category", skip_serializing_if = "Option::is_none")]
    pub category: std::option::Option<std::string::String>,
    #[serde(rename = "CollapseId", skip_serializing_if = "Option::is_none")]
    pub collapse_id: std::option::Option<std::string::String>,
    #[serde(rename = "Data", skip_serializing_if = "Option::is_none")]
    pub data: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "MediaUrl", skip_serializing_if = "Option::is_none")]
    pub media_url: std::option::Option<std::string::String>,
    #[serde(rename = "PreferredAuthenticationMethod", skip_serializing_if = "Option::is_none")]
    pub preferred_authentication_method: std::option::Option<std::string::String>,
    #[serde(rename = "Priority", skip_serializing_if = "Option::is_none")]
    pub priority: std::option::Option<std::string::String>,
    #[serde(rename = "RawContent", skip_serializing_if = "Option::is_none")]
    pub raw_content: std::option::Option<std::string::String>,
    #[serde(rename = "SilentPush", skip_serializing_if = "Option::is_none")]
    pub silent_push: std::option::Option<bool>,
    #[serde(rename = "Sound", skip_serializing_if = "Option::is_none")]
    pub sound: std::option::Option<std::string::String>,
    #[serde(rename = "Substitutions", skip_serializing_if = "Option::is_none")]
    pub substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
    #[serde(rename = "ThreadId", skip_serializing_if = "Option::is_none")]
    pub thread_id: std::option::Option<std::string::String>,
    #[serde(rename = "TimeToLive", skip_serializing_if = "Option::is_none")]
    pub time_to_live: std::option::Option<i32>,
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: std::option::Option<std::string::String>,
    #[serde(rename = "Url", skip_serializing_if = "Option::is_none")]
    pub url: std::option::Option<std::string::String>,
}
impl ApnsMessage {
    pub fn action(&self) -> std::option::Option<&crate::model::Action> {
        self.action.as_ref()
    }
    pub fn badge(&self) -> std::option::Option<i32> {
        self.badge
    }
    pub fn body(&self) -> std::option::Option<&str> {
        self.body.as_deref()
    }
    pub fn category(&self) -> std::option::Option<&str> {
        self.category.as_deref()
    }
    pub fn collapse_id(&self) -> std::option::Option<&str> {
        self.collapse_id.as_deref()
    }
    pub fn data(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.data.as_ref()
    }
    pub fn media_url(&self) -> std::option::Option<&str> {
        self.media_url.as_deref()
    }
    pub fn preferred_authentication_method(&self) -> std::option::Option<&str> {
        self.preferred_authentication_method.as_deref()
    }
    pub fn priority(&self) -> std::option::Option<&str> {
        self.priority.as_deref()
    }
    pub fn raw_content(&self) -> std::option::Option<&str> {
        self.raw_content.as_deref()
    }
    pub fn silent_push(&self) -> std::option::Option<bool> {
        self.silent_push
    }
    pub fn sound(&self) -> std::option::Option<&str> {
        self.sound.as_deref()
    }
    pub fn substitutions(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>> {
        self.substitutions.as_ref()
    }
    pub fn thread_id(&self) -> std::option::Option<&str> {
        self.thread_id.as_deref()
    }
    pub fn time_to_live(&self) -> std::option::Option<i32> {
        self.time_to_live
    }
    pub fn title(&self) -> std::option::Option<&str> {
        self.title.as_deref()
    }
    pub fn url(&self) -> std::option::Option<&str> {
        self.url.as_deref()
    }
}
/// See [`ApnsMessage`](crate::model::ApnsMessage)
pub mod apns_message {
    /// A builder for [`ApnsMessage`](crate::model::ApnsMessage)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) action: std::option::Option<crate::model::Action>,
        pub(crate) badge: std::option::Option<i32>,
        pub(crate) body: std::option::Option<std::string::String>,
        pub(crate) category: std::option::Option<std::string::String>,
        pub(crate) collapse_id: std::option::Option<std::string::String>,
        pub(crate) data: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) media_url: std::option::Option<std::string::String>,
        pub(crate) preferred_authentication_method: std::option::Option<std::string::String>,
        pub(crate) priority: std::option::Option<std::string::String>,
        pub(crate) raw_content: std::option::Option<std::string::String>,
        pub(crate) silent_push: std::option::Option<bool>,
        pub(crate) sound: std::option::Option<std::string::String>,
        pub(crate) substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
        pub(crate) thread_id: std::option::Option<std::string::String>,
        pub(crate) time_to_live: std::option::Option<i32>,
        pub(crate) title: std::option::Option<std::string::String>,
        pub(crate) url: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn action(mut self, input: crate::model::Action) -> Self {
            self.action = Some(input);
            self
        }
        pub fn set_action(mut self, input: std::option::Option<crate::model::Action>) -> Self {
            self.action = input;
            self
        }
        pub fn badge(mut self, input: i32) -> Self {
            self.badge = Some(input);
            self
        }
        pub fn set_badge(mut self, input: std::option::Option<i32>) -> Self {
            self.badge = input;
            self
        }
        pub fn body(mut self, input: impl Into<std::string::String>) -> Self {
            self.body = Some(input.into());
            self
        }
        pub fn set_body(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.body = input;
            self
        }
        pub fn category(mut self, input: impl Into<std::string::String>) -> Self {
            self.category = Some(input.into());
            self
        }
        pub fn set_category(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.category = input;
            self
        }
        pub fn collapse_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.collapse_id = Some(input.into());
            self
        }
        pub fn set_collapse_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.collapse_id = input;
            self
        }
        /// Adds a key-value pair to `data`.
        ///
        /// To override the contents of this collection use [`set_data`](Self::set_data).
        pub fn data(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.data.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.data = Some(hash_map);
            self
        }
        pub fn set_data(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.data = input;
            self
        }
        pub fn media_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.media_url = Some(input.into());
            self
        }
        pub fn set_media_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.media_url = input;
            self
        }
        pub fn preferred_authentication_method(mut self, input: impl Into<std::string::String>) -> Self {
            self.preferred_authentication_method = Some(input.into());
            self
        }
        pub fn set_preferred_authentication_method(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.preferred_authentication_method = input;
            self
        }
        pub fn priority(mut self, input: impl Into<std::string::String>) -> Self {
            self.priority = Some(input.into());
            self
        }
        pub fn set_priority(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.priority = input;
            self
        }
        pub fn raw_content(mut self, input: impl Into<std::string::String>) -> Self {
            self.raw_content = Some(input.into());
            self
        }
        pub fn set_raw_content(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.raw_content = input;
            self
        }
        pub fn silent_push(mut self, input: bool) -> Self {
            self.silent_push = Some(input);
            self
        }
        pub fn set_silent_push(mut self, input: std::option::Option<bool>) -> Self {
            self.silent_push = input;
            self
        }
        pub fn sound(mut self, input: impl Into<std::string::String>) -> Self {
            self.sound = Some(input.into());
            self
        }
        pub fn set_sound(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.sound = input;
            self
        }
        /// Adds a key-value pair to `substitutions`.
        ///
        /// To override the contents of this collection use [`set_substitutions`](Self::set_substitutions).
        pub fn substitutions(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<std::string::String>>,
        ) -> Self {
            let mut hash_map = self.substitutions.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.substitutions = Some(hash_map);
            self
        }
        pub fn set_substitutions(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>) -> Self {
            self.substitutions = input;
            self
        }
        pub fn thread_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.thread_id = Some(input.into());
            self
        }
        pub fn set_thread_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.thread_id = input;
            self
        }
        pub fn time_to_live(mut self, input: i32) -> Self {
            self.time_to_live = Some(input);
            self
        }
        pub fn set_time_to_live(mut self, input: std::option::Option<i32>) -> Self {
            self.time_to_live = input;
            self
        }
        pub fn title(mut self, input: impl Into<std::string::String>) -> Self {
            self.title = Some(input.into());
            self
        }
        pub fn set_title(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.title = input;
            self
        }
        pub fn url(mut self, input: impl Into<std::string::String>) -> Self {
            self.url = Some(input.into());
            self
        }
        pub fn set_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.url = input;
            self
        }
        /// Consumes the builder and constructs a [`ApnsMessage`](crate::model::ApnsMessage)
        pub fn build(self) -> crate::model::ApnsMessage {
            crate::model::ApnsMessage {
                action: self.action,
                badge: self.badge,
                body: self.body,
                category: self.category,
                collapse_id: self.collapse_id,
                data: self.data,
                media_url: self.media_url,
                preferred_authentication_method: self.preferred_authentication_method,
                priority: self.priority,
                raw_content: self.raw_content,
                silent_push: self.silent_push,
                sound: self.sound,
                substitutions: self.substitutions,
                thread_id: self.thread_id,
                time_to_live: self.time_to_live,
                title: self.title,
                url: self.url,
            }
        }
    }
}
impl ApnsMessage {
    /// Creates a new builder-style object to manufacture [`ApnsMessage`](crate::model::ApnsMessage)
    pub fn builder() -> crate::model::apns_message::Builder {
        crate::model::apns_message::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct DefaultMessage {
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub body: std::option::Option<std::string::String>,
    #[serde(rename = "Substitutions", skip_serializing_if = "Option::is_none")]
    pub substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
}
impl DefaultMessage {
    pub fn body(&self) -> std::option::Option<&str> {
        self.body.as_deref()
    }
    pub fn substitutions(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>> {
        self.substitutions.as_ref()
    }
}
/// See [`DefaultMessage`](crate::model::DefaultMessage)
pub mod default_message {
    /// A builder for [`DefaultMessage`](crate::model::DefaultMessage)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) body: std::option::Option<std::string::String>,
        pub(crate) substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
    }
    impl Builder {
        pub fn body(mut self, input: impl Into<std::string::String>) -> Self {
            self.body = Some(input.into());
            self
        }
        pub fn set_body(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.body = input;
            self
        }
        /// Adds a key-value pair to `substitutions`.
        ///
        /// To override the contents of this collection use [`set_substitutions`](Self::set_substitutions).
        pub fn substitutions(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<std::string::String>>,
        ) -> Self {
            let mut hash_map = self.substitutions.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.substitutions = Some(hash_map);
            self
        }
        pub fn set_substitutions(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>) -> Self {
            self.substitutions = input;
            self
        }
        /// Consumes the builder and constructs a [`DefaultMessage`](crate::model::DefaultMessage)
        pub fn build(self) -> crate::model::DefaultMessage {
            crate::model::DefaultMessage {
                body: self.body,
                substitutions: self.substitutions,
            }
        }
    }
}
impl DefaultMessage {
    /// Creates a new builder-style object to manufacture [`DefaultMessage`](crate::model::DefaultMessage)
    pub fn builder() -> crate::model::default_message::Builder {
        crate::model::default_message::Builder::default()
    }
}

/// Specifies the default settings and content for a push notification that's sent directly to an
/// endpoint.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct DefaultPushNotificationMessage {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub action: std::option::Option<crate::model::Action>,
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub body: std::option::Option<std::string::String>,
    #[serde(rename = "Data", skip_serializing_if = "Option::is_none")]
    pub data: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "SilentPush", skip_serializing_if = "Option::is_none")]
    pub silent_push: std::option::Option<bool>,
    #[serde(rename = "Substitutions", skip_serializing_if = "Option::is_none")]
    pub substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: std::option::Option<std::string::String>,
    #[serde(rename = "Url", skip_serializing_if = "Option::is_none")]
    pub url: std::option::Option<std::string::String>,
}
impl DefaultPushNotificationMessage {
    pub fn action(&self) -> std::option::Option<&crate::model::Action> {
        self.action.as_ref()
    }
    pub fn body(&self) -> std::option::Option<&str> {
        self.body.as_deref()
    }
    pub fn data(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.data.as_ref()
    }
    pub fn silent_push(&self) -> std::option::Option<bool> {
        self.silent_push
    }
    pub fn substitutions(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>> {
        self.substitutions.as_ref()
    }
    pub fn title(&self) -> std::option::Option<&str> {
        self.title.as_deref()
    }
    pub fn url(&self) -> std::option::Option<&str> {
        self.url.as_deref()
    }
}
/// See [`DefaultPushNotificationMessage`](crate::model::DefaultPushNotificationMessage)
pub mod default_push_notification_message {
    /// A builder for [`DefaultPushNotificationMessage`](crate::model::DefaultPushNotificationMessage)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) action: std::option::Option<crate::model::Action>,
        pub(crate) body: std::option::Option<std::string::String>,
        pub(crate) data: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) silent_push: std::option::Option<bool>,
        pub(crate) substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
        pub(crate) title: std::option::Option<std::string::String>,
        pub(crate) url: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn action(mut self, input: crate::model::Action) -> Self {
            self.action = Some(input);
            self
        }
        pub fn set_action(mut self, input: std::option::Option<crate::model::Action>) -> Self {
            self.action = input;
            self
        }
        pub fn body(mut self, input: impl Into<std::string::String>) -> Self {
            self.body = Some(input.into());
            self
        }
        pub fn set_body(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.body = input;
            self
        }
        /// Adds a key-value pair to `data`.
        ///
        /// To override the contents of this collection use [`set_data`](Self::set_data).
        pub fn data(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.data.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.data = Some(hash_map);
            self
        }
        pub fn set_data(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.data = input;
            self
        }
        pub fn silent_push(mut self, input: bool) -> Self {
            self.silent_push = Some(input);
            self
        }
        pub fn set_silent_push(mut self, input: std::option::Option<bool>) -> Self {
            self.silent_push = input;
            self
        }
        /// Adds a key-value pair to `substitutions`.
        ///
        /// To override the contents of this collection use [`set_substitutions`](Self::set_substitutions).
        pub fn substitutions(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<std::string::String>>,
        ) -> Self {
            let mut hash_map = self.substitutions.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.substitutions = Some(hash_map);
            self
        }
        pub fn set_substitutions(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>) -> Self {
            self.substitutions = input;
            self
        }
        pub fn title(mut self, input: impl Into<std::string::String>) -> Self {
            self.title = Some(input.into());
            self
        }
        pub fn set_title(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.title = input;
            self
        }
        pub fn url(mut self, input: impl Into<std::string::String>) -> Self {
            self.url = Some(input.into());
            self
        }
        pub fn set_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.url = input;
            self
        }
        /// Consumes the builder and constructs a [`DefaultPushNotificationMessage`](crate::model::DefaultPushNotificationMessage)
        pub fn build(self) -> crate::model::DefaultPushNotificationMessage {
            crate::model::DefaultPushNotificationMessage {
                action: self.action,
                body: self.body,
                data: self.data,
                silent_push: self.silent_push,
                substitutions: self.substitutions,
                title: self.title,
                url: self.url,
            }
        }
    }
}
impl DefaultPushNotificationMessage {
    /// Creates a new builder-style object to manufacture [`DefaultPushNotificationMessage`](crate::model::DefaultPushNotificationMessage)
    pub fn builder() -> crate::model::default_push_notification_message::Builder {
        crate::model::default_push_notification_message::Builder::default()
    }
}

/// Specifies the default settings for a one-time SMS message that's sent directly to an endpoint.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct SmsMessage {
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub body: std::option::Option<std::string::String>,
    #[serde(rename = "Keyword", skip_serializing_if = "Option::is_none")]
    pub keyword: std::option::Option<std::string::String>,
    #[serde(rename = "MediaUrl", skip_serializing_if = "Option::is_none")]
    pub media_url: std::option::Option<std::string::String>,
    #[serde(rename = "MessageType", skip_serializing_if = "Option::is_none")]
    pub message_type: std::option::Option<crate::model::MessageType>,
    #[serde(rename = "OriginationNumber", skip_serializing_if = "Option::is_none")]
    pub origination_number: std::option::Option<std::string::String>,
    #[serde(rename = "SenderId", skip_serializing_if = "Option::is_none")]
    pub sender_id: std::option::Option<std::string::String>,
    #[serde(rename = "Substitutions", skip_serializing_if = "Option::is_none")]
    pub substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
}
impl SmsMessage {
    pub fn body(&self) -> std::option::Option<&str> {
        self.body.as_deref()
    }
    pub fn keyword(&self) -> std::option::Option<&str> {
        self.keyword.as_deref()
    }
    pub fn media_url(&self) -> std::option::Option<&str> {
        self.media_url.as_deref()
    }
    pub fn message_type(&self) -> std::option::Option<&crate::model::MessageType> {
        self.message_type.as_ref()
    }
    pub fn origination_number(&self) -> std::option::Option<&str> {
        self.origination_number.as_deref()
    }
    pub fn sender_id(&self) -> std::option::Option<&str> {
        self.sender_id.as_deref()
    }
    pub fn substitutions(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>> {
        self.substitutions.as_ref()
    }
}
/// See [`SmsMessage`](crate::model::SmsMessage)
pub mod sms_message {
    /// A builder for [`SmsMessage`](crate::model::SmsMessage)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) body: std::option::Option<std::string::String>,
        pub(crate) keyword: std::option::Option<std::string::String>,
        pub(crate) media_url: std::option::Option<std::string::String>,
        pub(crate) message_type: std::option::Option<crate::model::MessageType>,
        pub(crate) origination_number: std::option::Option<std::string::String>,
        pub(crate) sender_id: std::option::Option<std::string::String>,
        pub(crate) substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
    }
    impl Builder {
        pub fn body(mut self, input: impl Into<std::string::String>) -> Self {
            self.body = Some(input.into());
            self
        }
        pub fn set_body(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.body = input;
            self
        }
        pub fn keyword(mut self, input: impl Into<std::string::String>) -> Self {
            self.keyword = Some(input.into());
            self
        }
        pub fn set_keyword(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.keyword = input;
            self
        }
        pub fn media_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.media_url = Some(input.into());
            self
        }
        pub fn set_media_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.media_url = input;
            self
        }
        pub fn message_type(mut self, input: crate::model::MessageType) -> Self {
            self.message_type = Some(input);
            self
        }
        pub fn set_message_type(mut self, input: std::option::Option<crate::model::MessageType>) -> Self {
            self.message_type = input;
            self
        }
        pub fn origination_number(mut self, input: impl Into<std::string::String>) -> Self {
            self.origination_number = Some(input.into());
            self
        }
        pub fn set_origination_number(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.origination_number = input;
            self
        }
        pub fn sender_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.sender_id = Some(input.into());
            self
        }
        pub fn set_sender_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.sender_id = input;
            self
        }
        /// Adds a key-value pair to `substitutions`.
        ///
        /// To override the contents of this collection use [`set_substitutions`](Self::set_substitutions).
        pub fn substitutions(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<std::string::String>>,
        ) -> Self {
            let mut hash_map = self.substitutions.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.substitutions = Some(hash_map);
            self
        }
        pub fn set_substitutions(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>) -> Self {
            self.substitutions = input;
            self
        }
        /// Consumes the builder and constructs a [`SmsMessage`](crate::model::SmsMessage)
        pub fn build(self) -> crate::model::SmsMessage {
            crate::model::SmsMessage {
                body: self.body,
                keyword: self.keyword,
                media_url: self.media_url,
                message_type: self.message_type,
                origination_number: self.origination_number,
                sender_id: self.sender_id,
                substitutions: self.substitutions,
            }
        }
    }
}
impl SmsMessage {
    /// Creates a new builder-style object to manufacture [`SmsMessage`](crate::model::SmsMessage)
    pub fn builder() -> crate::model::sms_message::Builder {
        crate::model::sms_message::Builder::default()
    }
}

/// Provides information about the results of a request to send a message to an endpoint address.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct MessageResponse {
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub application_id: std::option::Option<std::string::String>,
    #[serde(rename = "EndpointResult", skip_serializing_if = "Option::is_none")]
    pub endpoint_result: std::option::Option<std::collections::HashMap<std::string::String, crate::model::EndpointMessageResult>>,
    #[serde(rename = "RequestId", skip_serializing_if = "Option::is_none")]
    pub request_id: std::option::Option<std::string::String>,
    #[serde(rename = "Result", skip_serializing_if = "Option::is_none")]
    pub result: std::option::Option<std::collections::HashMap<std::string::String, crate::model::MessageResult>>,
}
impl MessageResponse {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn endpoint_result(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, crate::model::EndpointMessageResult>> {
        self.endpoint_result.as_ref()
    }
    pub fn request_id(&self) -> std::option::Option<&str> {
        self.request_id.as_deref()
    }
    pub fn result(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, crate::model::MessageResult>> {
        self.result.as_ref()
    }
}
/// See [`MessageResponse`](crate::model::MessageResponse)
pub mod message_response {
    /// A builder for [`MessageResponse`](crate::model::MessageResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) endpoint_result: std::option::Option<std::collections::HashMap<std::string::String, crate::model::EndpointMessageResult>>,
        pub(crate) request_id: std::option::Option<std::string::String>,
        pub(crate) result: std::option::Option<std::collections::HashMap<std::string::String, crate::model::MessageResult>>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// Adds a key-value pair to `endpoint_result`.
        ///
        /// To override the contents of this collection use [`set_endpoint_result`](Self::set_endpoint_result).
        pub fn endpoint_result(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::EndpointMessageResult>,
        ) -> Self {
            let mut hash_map = self.endpoint_result.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.endpoint_result = Some(hash_map);
            self
        }
        pub fn set_endpoint_result(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, crate::model::EndpointMessageResult>>) -> Self {
            self.endpoint_result = input;
            self
        }
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// Adds a key-value pair to `result`.
        ///
        /// To override the contents of this collection use [`set_result`](Self::set_result).
        pub fn result(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::MessageResult>,
        ) -> Self {
            let mut hash_map = self.result.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.result = Some(hash_map);
            self
        }
        pub fn set_result(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, crate::model::MessageResult>>) -> Self {
            self.result = input;
            self
        }
        /// Consumes the builder and constructs a [`MessageResponse`](crate::model::MessageResponse)
        pub fn build(self) -> crate::model::MessageResponse {
            crate::model::MessageResponse {
                application_id: self.application_id,
                endpoint_result: self.endpoint_result,
                request_id: self.request_id,
                result: self.result,
            }
        }
    }
}
impl MessageResponse {
    /// Creates a new builder-style object to manufacture [`MessageResponse`](crate::model::MessageResponse)
    pub fn builder() -> crate::model::message_response::Builder {
        crate::model::message_response::Builder::default()
    }
}

/// Provides information about the delivery status and results of sending a message directly to an
/// endpoint.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct EndpointMessageResult {
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    pub address: std::option::Option<std::string::String>,
    #[serde(rename = "DeliveryStatus", skip_serializing_if = "Option::is_none")]
    pub delivery_status: std::option::Option<crate::model::DeliveryStatus>,
    #[serde(rename = "MessageId", skip_serializing_if = "Option::is_none")]
    pub message_id: std::option::Option<std::string::String>,
    #[serde(rename = "StatusCode", skip_serializing_if = "Option::is_none")]
    pub status_code: std::option::Option<i32>,
    #[serde(rename = "StatusMessage", skip_serializing_if = "Option::is_none")]
    pub status_message: std::option::Option<std::string::String>,
    #[serde(rename = "UpdatedToken", skip_serializing_if = "Option::is_none")]
    pub updated_token: std::option::Option<std::string::String>,
}
impl EndpointMessageResult {
    pub fn address(&self) -> std::option::Option<&str> {
        self.address.as_deref()
    }
    pub fn delivery_status(&self) -> std::option::Option<&crate::model::DeliveryStatus> {
        self.delivery_status.as_ref()
    }
    pub fn message_id(&self) -> std::option::Option<&str> {
        self.message_id.as_deref()
    }
    pub fn status_code(&self) -> std::option::Option<i32> {
        self.status_code
    }
    pub fn status_message(&self) -> std::option::Option<&str> {
        self.status_message.as_deref()
    }
    pub fn updated_token(&self) -> std::option::Option<&str> {
        self.updated_token.as_deref()
    }
}
/// See [`EndpointMessageResult`](crate::model::EndpointMessageResult)
pub mod endpoint_message_result {
    /// A builder for [`EndpointMessageResult`](crate::model::EndpointMessageResult)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) address: std::option::Option<std::string::String>,
        pub(crate) delivery_status: std::option::Option<crate::model::DeliveryStatus>,
        pub(crate) message_id: std::option::Option<std::string::String>,
        pub(crate) status_code: std::option::Option<i32>,
        pub(crate) status_message: std::option::Option<std::string::String>,
        pub(crate) updated_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn address(mut self, input: impl Into<std::string::String>) -> Self {
            self.address = Some(input.into());
            self
        }
        pub fn set_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.address = input;
            self
        }
        pub fn delivery_status(mut self, input: crate::model::DeliveryStatus) -> Self {
            self.delivery_status = Some(input);
            self
        }
        pub fn set_delivery_status(mut self, input: std::option::Option<crate::model::DeliveryStatus>) -> Self {
            self.delivery_status = input;
            self
        }
        pub fn message_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.message_id = Some(input.into());
            self
        }
        pub fn set_message_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message_id = input;
            self
        }
        pub fn status_code(mut self, input: i32) -> Self {
            self.status_code = Some(input);
            self
        }
        pub fn set_status_code(mut self, input: std::option::Option<i32>) -> Self {
            self.status_code = input;
            self
        }
        pub fn status_message(mut self, input: impl Into<std::string::String>) -> Self {
            self.status_message = Some(input.into());
            self
        }
        pub fn set_status_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.status_message = input;
            self
        }
        pub fn updated_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.updated_token = Some(input.into());
            self
        }
        pub fn set_updated_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.updated_token = input;
            self
        }
        /// Consumes the builder and constructs a [`EndpointMessageResult`](crate::model::EndpointMessageResult)
        pub fn build(self) -> crate::model::EndpointMessageResult {
            crate::model::EndpointMessageResult {
                address: self.address,
                delivery_status: self.delivery_status,
                message_id: self.message_id,
                status_code: self.status_code,
                status_message: self.status_message,
                updated_token: self.updated_token,
            }
        }
    }
}
impl EndpointMessageResult {
    /// Creates a new builder-style object to manufacture [`EndpointMessageResult`](crate::model::EndpointMessageResult)
    pub fn builder() -> crate::model::endpoint_message_result::Builder {
        crate::model::endpoint_message_result::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct MessageResult {
    #[serde(rename = "DeliveryStatus", skip_serializing_if = "Option::is_none")]
    pub delivery_status: std::option::Option<crate::model::DeliveryStatus>,
    #[serde(rename = "MessageId", skip_serializing_if = "Option::is_none")]
    pub message_id: std::option::Option<std::string::String>,
    #[serde(rename = "StatusCode", skip_serializing_if = "Option::is_none")]
    pub status_code: std::option::Option<i32>,
    #[serde(rename = "StatusMessage", skip_serializing_if = "Option::is_none")]
    pub status_message: std::option::Option<std::string::String>,
    #[serde(rename = "UpdatedToken", skip_serializing_if = "Option::is_none")]
    pub updated_token: std::option::Option<std::string::String>,
}
impl MessageResult {
    pub fn delivery_status(&self) -> std::option::Option<&crate::model::DeliveryStatus> {
        self.delivery_status.as_ref()
    }
    pub fn message_id(&self) -> std::option::Option<&str> {
        self.message_id.as_deref()
    }
    pub fn status_code(&self) -> std::option::Option<i32> {
        self.status_code
    }
    pub fn status_message(&self) -> std::option::Option<&str> {
        self.status_message.as_deref()
    }
    pub fn updated_token(&self) -> std::option::Option<&str> {
        self.updated_token.as_deref()
    }
}
/// See [`MessageResult`](crate::model::MessageResult)
pub mod message_result {
    /// A builder for [`MessageResult`](crate::model::MessageResult)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) delivery_status: std::option::Option<crate::model::DeliveryStatus>,
        pub(crate) message_id: std::option::Option<std::string::String>,
        pub(crate) status_code: std::option::Option<i32>,
        pub(crate) status_message: std::option::Option<std::string::String>,
        pub(crate) updated_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn delivery_status(mut self, input: crate::model::DeliveryStatus) -> Self {
            self.delivery_status = Some(input);
            self
        }
        pub fn set_delivery_status(mut self, input: std::option::Option<crate::model::DeliveryStatus>) -> Self {
            self.delivery_status = input;
            self
        }
        pub fn message_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.message_id = Some(input.into());
            self
        }
        pub fn set_message_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message_id = input;
            self
        }
        pub fn status_code(mut self, input: i32) -> Self {
            self.status_code = Some(input);
            self
        }
        pub fn set_status_code(mut self, input: std::option::Option<i32>) -> Self {
            self.status_code = input;
            self
        }
        pub fn status_message(mut self, input: impl Into<std::string::String>) -> Self {
            self.status_message = Some(input.into());
            self
        }
        pub fn set_status_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.status_message = input;
            self
        }
        pub fn updated_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.updated_token = Some(input.into());
            self
        }
        pub fn set_updated_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.updated_token = input;
            self
        }
        /// Consumes the builder and constructs a [`MessageResult`](crate::model::MessageResult)
        pub fn build(self) -> crate::model::MessageResult {
            crate::model::MessageResult {
                delivery_status: self.delivery_status,
                message_id: self.message_id,
                status_code: self.status_code,
                status_message: self.status_message,
                updated_token: self.updated_token,
            }
        }
    }
}
impl MessageResult {
    /// Creates a new builder-style object to manufacture [`MessageResult`](crate::model::MessageResult)
    pub fn builder() -> crate::model::message_result::Builder {
        crate::model::message_result::Builder::default()
    }
}

/// Specifies the configuration and other settings for a journey.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct WriteJourneyRequest {
    #[serde(rename = "Activities", skip_serializing_if = "Option::is_none")]
    pub activities: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Activity>>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub creation_date: std::option::Option<std::string::String>,
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub last_modified_date: std::option::Option<std::string::String>,
    #[serde(rename = "Limits", skip_serializing_if = "Option::is_none")]
    pub limits: std::option::Option<crate::model::JourneyLimits>,
    #[serde(rename = "LocalTime", skip_serializing_if = "Option::is_none")]
    pub local_time: std::option::Option<bool>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "QuietTime", skip_serializing_if = "Option::is_none")]
    pub quiet_time: std::option::Option<crate::model::QuietTime>,
    /// The frequency with which Amazon Pinpoint evaluates segment and event data for the journey,
    /// as a duration in ISO 8601 format.
    #[serde(rename = "RefreshFrequency", skip_serializing_if = "Option::is_none")]
    pub refresh_frequency: std::option::Option<std::string::String>,
    #[serde(rename = "Schedule", skip_serializing_if = "Option::is_none")]
    pub schedule: std::option::Option<crate::model::JourneySchedule>,
    #[serde(rename = "StartActivity", skip_serializing_if = "Option::is_none")]
    pub start_activity: std::option::Option<std::string::String>,
    #[serde(rename = "StartCondition", skip_serializing_if = "Option::is_none")]
    pub start_condition: std::option::Option<crate::model::StartCondition>,
    /// The status of the journey. When creating or updating a journey, only `DRAFT`, `ACTIVE` and
    /// `PAUSED` are accepted.
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: std::option::Option<crate::model::State>,
}
impl WriteJourneyRequest {
    pub fn activities(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, crate::model::Activity>> {
        self.activities.as_ref()
    }
    pub fn creation_date(&self) -> std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    pub fn last_modified_date(&self) -> std::option::Option<&str> {
        self.last_modified_date.as_deref()
    }
    pub fn limits(&self) -> std::option::Option<&crate::model::JourneyLimits> {
        self.limits.as_ref()
    }
    pub fn local_time(&self) -> std::option::Option<bool> {
        self.local_time
    }
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    pub fn quiet_time(&self) -> std::option::Option<&crate::model::QuietTime> {
        self.quiet_time.as_ref()
    }
    pub fn refresh_frequency(&self) -> std::option::Option<&str> {
        self.refresh_frequency.as_deref()
    }
    pub fn schedule(&self) -> std::option::Option<&crate::model::JourneySchedule> {
        self.schedule.as_ref()
    }
    pub fn start_activity(&self) -> std::option::Option<&str> {
        self.start_activity.as_deref()
    }
    pub fn start_condition(&self) -> std::option::Option<&crate::model::StartCondition> {
        self.start_condition.as_ref()
    }
    pub fn state(&self) -> std::option::Option<&crate::model::State> {
        self.state.as_ref()
    }
}
/// See [`WriteJourneyRequest`](crate::model::WriteJourneyRequest)
pub mod write_journey_request {
    /// A builder for [`WriteJourneyRequest`](crate::model::WriteJourneyRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) activities: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Activity>>,
        pub(crate) creation_date: std::option::Option<std::string::String>,
        pub(crate) last_modified_date: std::option::Option<std::string::String>,
        pub(crate) limits: std::option::Option<crate::model::JourneyLimits>,
        pub(crate) local_time: std::option::Option<bool>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) quiet_time: std::option::Option<crate::model::QuietTime>,
        pub(crate) refresh_frequency: std::option::Option<std::string::String>,
        pub(crate) schedule: std::option::Option<crate::model::JourneySchedule>,
        pub(crate) start_activity: std::option::Option<std::string::String>,
        pub(crate) start_condition: std::option::Option<crate::model::StartCondition>,
        pub(crate) state: std::option::Option<crate::model::State>,
    }
    impl Builder {
        /// Adds a key-value pair to `activities`.
        ///
        /// To override the contents of this collection use [`set_activities`](Self::set_activities).
        pub fn activities(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::Activity>,
        ) -> Self {
            let mut hash_map = self.activities.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.activities = Some(hash_map);
            self
        }
        pub fn set_activities(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Activity>>) -> Self {
            self.activities = input;
            self
        }
        pub fn creation_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.creation_date = Some(input.into());
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creation_date = input;
            self
        }
        pub fn last_modified_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_modified_date = Some(input.into());
            self
        }
        pub fn set_last_modified_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.last_modified_date = input;
            self
        }
        pub fn limits(mut self, input: crate::model::JourneyLimits) -> Self {
            self.limits = Some(input);
            self
        }
        pub fn set_limits(mut self, input: std::option::Option<crate::model::JourneyLimits>) -> Self {
            self.limits = input;
            self
        }
        pub fn local_time(mut self, input: bool) -> Self {
            self.local_time = Some(input);
            self
        }
        pub fn set_local_time(mut self, input: std::option::Option<bool>) -> Self {
            self.local_time = input;
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn quiet_time(mut self, input: crate::model::QuietTime) -> Self {
            self.quiet_time = Some(input);
            self
        }
        pub fn set_quiet_time(mut self, input: std::option::Option<crate::model::QuietTime>) -> Self {
            self.quiet_time = input;
            self
        }
        pub fn refresh_frequency(mut self, input: impl Into<std::string::String>) -> Self {
            self.refresh_frequency = Some(input.into());
            self
        }
        pub fn set_refresh_frequency(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.refresh_frequency = input;
            self
        }
        pub fn schedule(mut self, input: crate::model::JourneySchedule) -> Self {
            self.schedule = Some(input);
            self
        }
        pub fn set_schedule(mut self, input: std::option::Option<crate::model::JourneySchedule>) -> Self {
            self.schedule = input;
            self
        }
        pub fn start_activity(mut self, input: impl Into<std::string::String>) -> Self {
            self.start_activity = Some(input.into());
            self
        }
        pub fn set_start_activity(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.start_activity = input;
            self
        }
        pub fn start_condition(mut self, input: crate::model::StartCondition) -> Self {
            self.start_condition = Some(input);
            self
        }
        pub fn set_start_condition(mut self, input: std::option::Option<crate::model::StartCondition>) -> Self {
            self.start_condition = input;
            self
        }
        pub fn state(mut self, input: crate::model::State) -> Self {
            self.state = Some(input);
            self
        }
        pub fn set_state(mut self, input: std::option::Option<crate::model::State>) -> Self {
            self.state = input;
            self
        }
        /// Consumes the builder and constructs a [`WriteJourneyRequest`](crate::model::WriteJourneyRequest)
        pub fn build(self) -> crate::model::WriteJourneyRequest {
            crate::model::WriteJourneyRequest {
                activities: self.activities,
                creation_date: self.creation_date,
                last_modified_date: self.last_modified_date,
                limits: self.limits,
                local_time: self.local_time,
                name: self.name,
                quiet_time: self.quiet_time,
                refresh_frequency: self.refresh_frequency,
                schedule: self.schedule,
                start_activity: self.start_activity,
                start_condition: self.start_condition,
                state: self.state,
            }
        }
    }
}
impl WriteJourneyRequest {
    /// Creates a new builder-style object to manufacture [`WriteJourneyRequest`](crate::model::WriteJourneyRequest)
    pub fn builder() -> crate::model::write_journey_request::Builder {
        crate::model::write_journey_request::Builder::default()
    }
}

/// Provides information about the status, configuration, and other settings for a journey.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct JourneyResponse {
    /// A map that contains a set of [`Activity`](crate::model::Activity) objects, one object for
    /// each activity in the journey. For each object, the key is the unique identifier for the
    /// activity.
    #[serde(rename = "Activities", skip_serializing_if = "Option::is_none")]
    pub activities: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Activity>>,
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub application_id: std::option::Option<std::string::String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub creation_date: std::option::Option<std::string::String>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: std::option::Option<std::string::String>,
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub last_modified_date: std::option::Option<std::string::String>,
    #[serde(rename = "Limits", skip_serializing_if = "Option::is_none")]
    pub limits: std::option::Option<crate::model::JourneyLimits>,
    /// Specifies whether the journey's scheduled start and end times use each participant's local
    /// time.
    #[serde(rename = "LocalTime", skip_serializing_if = "Option::is_none")]
    pub local_time: std::option::Option<bool>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "QuietTime", skip_serializing_if = "Option::is_none")]
    pub quiet_time: std::option::Option<crate::model::QuietTime>,
    #[serde(rename = "RefreshFrequency", skip_serializing_if = "Option::is_none")]
    pub refresh_frequency: std::option::Option<std::string::String>,
    #[serde(rename = "Schedule", skip_serializing_if = "Option::is_none")]
    pub schedule: std::option::Option<crate::model::JourneySchedule>,
    /// The unique identifier for the first activity in the journey.
    #[serde(rename = "StartActivity", skip_serializing_if = "Option::is_none")]
    pub start_activity: std::option::Option<std::string::String>,
    #[serde(rename = "StartCondition", skip_serializing_if = "Option::is_none")]
    pub start_condition: std::option::Option<crate::model::StartCondition>,
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: std::option::Option<crate::model::State>,
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
impl JourneyResponse {
    pub fn activities(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, crate::model::Activity>> {
        self.activities.as_ref()
    }
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn creation_date(&self) -> std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    pub fn last_modified_date(&self) -> std::option::Option<&str> {
        self.last_modified_date.as_deref()
    }
    pub fn limits(&self) -> std::option::Option<&crate::model::JourneyLimits> {
        self.limits.as_ref()
    }
    pub fn local_time(&self) -> std::option::Option<bool> {
        self.local_time
    }
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    pub fn quiet_time(&self) -> std::option::Option<&crate::model::QuietTime> {
        self.quiet_time.as_ref()
    }
    pub fn refresh_frequency(&self) -> std::option::Option<&str> {
        self.refresh_frequency.as_deref()
    }
    pub fn schedule(&self) -> std::option::Option<&crate::model::JourneySchedule> {
        self.schedule.as_ref()
    }
    pub fn start_activity(&self) -> std::option::Option<&str> {
        self.start_activity.as_deref()
    }
    pub fn start_condition(&self) -> std::option::Option<&crate::model::StartCondition> {
        self.start_condition.as_ref()
    }
    pub fn state(&self) -> std::option::Option<&crate::model::State> {
        self.state.as_ref()
    }
    pub fn tags(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.tags.as_ref()
    }
}
/// See [`JourneyResponse`](crate::model::JourneyResponse)
pub mod journey_response {
    /// A builder for [`JourneyResponse`](crate::model::JourneyResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) activities: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Activity>>,
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) creation_date: std::option::Option<std::string::String>,
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) last_modified_date: std::option::Option<std::string::String>,
        pub(crate) limits: std::option::Option<crate::model::JourneyLimits>,
        pub(crate) local_time: std::option::Option<bool>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) quiet_time: std::option::Option<crate::model::QuietTime>,
        pub(crate) refresh_frequency: std::option::Option<std::string::String>,
        pub(crate) schedule: std::option::Option<crate::model::JourneySchedule>,
        pub(crate) start_activity: std::option::Option<std::string::String>,
        pub(crate) start_condition: std::option::Option<crate::model::StartCondition>,
        pub(crate) state: std::option::Option<crate::model::State>,
        pub(crate) tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        /// Adds a key-value pair to `activities`.
        ///
        /// To override the contents of this collection use [`set_activities`](Self::set_activities).
        pub fn activities(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::Activity>,
        ) -> Self {
            let mut hash_map = self.activities.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.activities = Some(hash_map);
            self
        }
        pub fn set_activities(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Activity>>) -> Self {
            self.activities = input;
            self
        }
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn creation_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.creation_date = Some(input.into());
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creation_date = input;
            self
        }
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn last_modified_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_modified_date = Some(input.into());
            self
        }
        pub fn set_last_modified_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.last_modified_date = input;
            self
        }
        pub fn limits(mut self, input: crate::model::JourneyLimits) -> Self {
            self.limits = Some(input);
            self
        }
        pub fn set_limits(mut self, input: std::option::Option<crate::model::JourneyLimits>) -> Self {
            self.limits = input;
            self
        }
        pub fn local_time(mut self, input: bool) -> Self {
            self.local_time = Some(input);
            self
        }
        pub fn set_local_time(mut self, input: std::option::Option<bool>) -> Self {
            self.local_time = input;
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn quiet_time(mut self, input: crate::model::QuietTime) -> Self {
            self.quiet_time = Some(input);
            self
        }
        pub fn set_quiet_time(mut self, input: std::option::Option<crate::model::QuietTime>) -> Self {
            self.quiet_time = input;
            self
        }
        pub fn refresh_frequency(mut self, input: impl Into<std::string::String>) -> Self {
            self.refresh_frequency = Some(input.into());
            self
        }
        pub fn set_refresh_frequency(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.refresh_frequency = input;
            self
        }
        pub fn schedule(mut self, input: crate::model::JourneySchedule) -> Self {
            self.schedule = Some(input);
            self
        }
        pub fn set_schedule(mut self, input: std::option::Option<crate::model::JourneySchedule>) -> Self {
            self.schedule = input;
            self
        }
        pub fn start_activity(mut self, input: impl Into<std::string::String>) -> Self {
            self.start_activity = Some(input.into());
            self
        }
        pub fn set_start_activity(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.start_activity = input;
            self
        }
        pub fn start_condition(mut self, input: crate::model::StartCondition) -> Self {
            self.start_condition = Some(input);
            self
        }
        pub fn set_start_condition(mut self, input: std::option::Option<crate::model::StartCondition>) -> Self {
            self.start_condition = input;
            self
        }
        pub fn state(mut self, input: crate::model::State) -> Self {
            self.state = Some(input);
            self
        }
        pub fn set_state(mut self, input: std::option::Option<crate::model::State>) -> Self {
            self.state = input;
            self
        }
        /// Adds a key-value pair to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`JourneyResponse`](crate::model::JourneyResponse)
        pub fn build(self) -> crate::model::JourneyResponse {
            crate::model::JourneyResponse {
                activities: self.activities,
                application_id: self.application_id,
                creation_date: self.creation_date,
                id: self.id,
                last_modified_date: self.last_modified_date,
                limits: self.limits,
                local_time: self.local_time,
                name: self.name,
                quiet_time: self.quiet_time,
                refresh_frequency: self.refresh_frequency,
                schedule: self.schedule,
                start_activity: self.start_activity,
                start_condition: self.start_condition,
                state: self.state,
                tags: self.tags,
            }
        }
    }
}
impl JourneyResponse {
    /// Creates a new builder-style object to manufacture [`JourneyResponse`](crate::model::JourneyResponse)
    pub fn builder() -> crate::model::journey_response::Builder {
        crate::model::journey_response::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct JourneysResponse {
    #[serde(rename = "Item", skip_serializing_if = "Option::is_none")]
    pub item: std::option::Option<std::vec::Vec<crate::model::JourneyResponse>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl JourneysResponse {
    pub fn item(&self) -> std::option::Option<&[crate::model::JourneyResponse]> {
        self.item.as_deref()
    }
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
/// See [`JourneysResponse`](crate::model::JourneysResponse)
pub mod journeys_response {
    /// A builder for [`JourneysResponse`](crate::model::JourneysResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) item: std::option::Option<std::vec::Vec<crate::model::JourneyResponse>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `item`.
        ///
        /// To override the contents of this collection use [`set_item`](Self::set_item).
        pub fn item(mut self, input: impl Into<crate::model::JourneyResponse>) -> Self {
            let mut v = self.item.unwrap_or_default();
            v.push(input.into());
            self.item = Some(v);
            self
        }
        pub fn set_item(mut self, input: std::option::Option<std::vec::Vec<crate::model::JourneyResponse>>) -> Self {
            self.item = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`JourneysResponse`](crate::model::JourneysResponse)
        pub fn build(self) -> crate::model::JourneysResponse {
            crate::model::JourneysResponse {
                item: self.item,
                next_token: self.next_token,
            }
        }
    }
}
impl JourneysResponse {
    /// Creates a new builder-style object to manufacture [`JourneysResponse`](crate::model::JourneysResponse)
    pub fn builder() -> crate::model::journeys_response::Builder {
        crate::model::journeys_response::Builder::default()
    }
}

/// Specifies limits on the messages that a journey can send and the number of times participants
/// can enter a journey.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct JourneyLimits {
    #[serde(rename = "DailyCap", skip_serializing_if = "Option::is_none")]
    pub daily_cap: std::option::Option<i32>,
    #[serde(rename = "EndpointReentryCap", skip_serializing_if = "Option::is_none")]
    pub endpoint_reentry_cap: std::option::Option<i32>,
    #[serde(rename = "MessagesPerSecond", skip_serializing_if = "Option::is_none")]
    pub messages_per_second: std::option::Option<i32>,
}
impl JourneyLimits {
    pub fn daily_cap(&self) -> std::option::Option<i32> {
        self.daily_cap
    }
    pub fn endpoint_reentry_cap(&self) -> std::option::Option<i32> {
        self.endpoint_reentry_cap
    }
    pub fn messages_per_second(&self) -> std::option::Option<i32> {
        self.messages_per_second
    }
}
/// See [`JourneyLimits`](crate::model::JourneyLimits)
pub mod journey_limits {
    /// A builder for [`JourneyLimits`](crate::model::JourneyLimits)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) daily_cap: std::option::Option<i32>,
        pub(crate) endpoint_reentry_cap: std::option::Option<i32>,
        pub(crate) messages_per_second: std::option::Option<i32>,
    }
    impl Builder {
        pub fn daily_cap(mut self, input: i32) -> Self {
            self.daily_cap = Some(input);
            self
        }
        pub fn set_daily_cap(mut self, input: std::option::Option<i32>) -> Self {
            self.daily_cap = input;
            self
        }
        pub fn endpoint_reentry_cap(mut self, input: i32) -> Self {
            self.endpoint_reentry_cap = Some(input);
            self
        }
        pub fn set_endpoint_reentry_cap(mut self, input: std::option::Option<i32>) -> Self {
            self.endpoint_reentry_cap = input;
            self
        }
        pub fn messages_per_second(mut self, input: i32) -> Self {
            self.messages_per_second = Some(input);
            self
        }
        pub fn set_messages_per_second(mut self, input: std::option::Option<i32>) -> Self {
            self.messages_per_second = input;
            self
        }
        /// Consumes the builder and constructs a [`JourneyLimits`](crate::model::JourneyLimits)
        pub fn build(self) -> crate::model::JourneyLimits {
            crate::model::JourneyLimits {
                daily_cap: self.daily_cap,
                endpoint_reentry_cap: self.endpoint_reentry_cap,
                messages_per_second: self.messages_per_second,
            }
        }
    }
}
impl JourneyLimits {
    /// Creates a new builder-style object to manufacture [`JourneyLimits`](crate::model::JourneyLimits)
    pub fn builder() -> crate::model::journey_limits::Builder {
        crate::model::journey_limits::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct JourneySchedule {
    #[serde(rename = "EndTime", skip_serializing_if = "Option::is_none")]
    pub end_time: std::option::Option<std::string::String>,
    #[serde(rename = "StartTime", skip_serializing_if = "Option::is_none")]
    pub start_time: std::option::Option<std::string::String>,
    #[serde(rename = "Timezone", skip_serializing_if = "Option::is_none")]
    pub timezone: std::option::Option<std::string::String>,
}
impl JourneySchedule {
    pub fn end_time(&self) -> std::option::Option<&str> {
        self.end_time.as_deref()
    }
    pub fn start_time(&self) -> std::option::Option<&str> {
        self.start_time.as_deref()
    }
    pub fn timezone(&self) -> std::option::Option<&str> {
        self.timezone.as_deref()
    }
}
/// See [`JourneySchedule`](crate::model::JourneySchedule)
pub mod journey_schedule {
    /// A builder for [`JourneySchedule`](crate::model::JourneySchedule)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) end_time: std::option::Option<std::string::String>,
        pub(crate) start_time: std::option::Option<std::string::String>,
        pub(crate) timezone: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn end_time(mut self, input: impl Into<std::string::String>) -> Self {
            self.end_time = Some(input.into());
            self
        }
        pub fn set_end_time(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.end_time = input;
            self
        }
        pub fn start_time(mut self, input: impl Into<std::string::String>) -> Self {
            self.start_time = Some(input.into());
            self
        }
        pub fn set_start_time(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.start_time = input;
            self
        }
        pub fn timezone(mut self, input: impl Into<std::string::String>) -> Self {
            self.timezone = Some(input.into());
            self
        }
        pub fn set_timezone(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.timezone = input;
            self
        }
        /// Consumes the builder and constructs a [`JourneySchedule`](crate::model::JourneySchedule)
        pub fn build(self) -> crate::model::JourneySchedule {
            crate::model::JourneySchedule {
                end_time: self.end_time,
                start_time: self.start_time,
                timezone: self.timezone,
            }
        }
    }
}
impl JourneySchedule {
    /// Creates a new builder-style object to manufacture [`JourneySchedule`](crate::model::JourneySchedule)
    pub fn builder() -> crate::model::journey_schedule::Builder {
        crate::model::journey_schedule::Builder::default()
    }
}

/// Specifies the conditions for the first activity in a journey.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct StartCondition {
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "SegmentStartCondition", skip_serializing_if = "Option::is_none")]
    pub segment_start_condition: std::option::Option<crate::model::SegmentCondition>,
}
impl StartCondition {
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }
    pub fn segment_start_condition(&self) -> std::option::Option<&crate::model::SegmentCondition> {
        self.segment_start_condition.as_ref()
    }
}
/// See [`StartCondition`](crate::model::StartCondition)
pub mod start_condition {
    /// A builder for [`StartCondition`](crate::model::StartCondition)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) segment_start_condition: std::option::Option<crate::model::SegmentCondition>,
    }
    impl Builder {
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        pub fn segment_start_condition(mut self, input: crate::model::SegmentCondition) -> Self {
            self.segment_start_condition = Some(input);
            self
        }
        pub fn set_segment_start_condition(mut self, input: std::option::Option<crate::model::SegmentCondition>) -> Self {
            self.segment_start_condition = input;
            self
        }
        /// Consumes the builder and constructs a [`StartCondition`](crate::model::StartCondition)
        pub fn build(self) -> crate::model::StartCondition {
            crate::model::StartCondition {
                description: self.description,
                segment_start_condition: self.segment_start_condition,
            }
        }
    }
}
impl StartCondition {
    /// Creates a new builder-style object to manufacture [`StartCondition`](crate::model::StartCondition)
    pub fn builder() -> crate::model::start_condition::Builder {
        crate::model::start_condition::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct SegmentCondition {
    #[serde(rename = "SegmentId", skip_serializing_if = "Option::is_none")]
    pub segment_id: std::option::Option<std::string::String>,
}
impl SegmentCondition {
    pub fn segment_id(&self) -> std::option::Option<&str> {
        self.segment_id.as_deref()
    }
}
/// See [`SegmentCondition`](crate::model::SegmentCondition)
pub mod segment_condition {
    /// A builder for [`SegmentCondition`](crate::model::SegmentCondition)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segment_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn segment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.segment_id = Some(input.into());
            self
        }
        pub fn set_segment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.segment_id = input;
            self
        }
        /// Consumes the builder and constructs a [`SegmentCondition`](crate::model::SegmentCondition)
        pub fn build(self) -> crate::model::SegmentCondition {
            crate::model::SegmentCondition {
                segment_id: self.segment_id,
            }
        }
    }
}
impl SegmentCondition {
    /// Creates a new builder-style object to manufacture [`SegmentCondition`](crate::model::SegmentCondition)
    pub fn builder() -> crate::model::segment_condition::Builder {
        crate::model::segment_condition::Builder::default()
    }
}

/// Specifies the configuration and other settings for an activity in a journey. Exactly one of the
/// activity members is expected to be set.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct Activity {
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    #[serde(rename = "EMAIL", skip_serializing_if = "Option::is_none")]
    pub email: std::option::Option<crate::model::EmailMessageActivity>,
    #[serde(rename = "Holdout", skip_serializing_if = "Option::is_none")]
    pub holdout: std::option::Option<crate::model::HoldoutActivity>,
    #[serde(rename = "PUSH", skip_serializing_if = "Option::is_none")]
    pub push: std::option::Option<crate::model::PushMessageActivity>,
    #[serde(rename = "RandomSplit", skip_serializing_if = "Option::is_none")]
    pub random_split: std::option::Option<crate::model::RandomSplitActivity>,
    #[serde(rename = "SMS", skip_serializing_if = "Option::is_none")]
    pub sms: std::option::Option<crate::model::SmsMessageActivity>,
    #[serde(rename = "Wait", skip_serializing_if = "Option::is_none")]
    pub wait: std::option::Option<crate::model::WaitActivity>,
}
impl Activity {
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }
    pub fn email(&self) -> std::option::Option<&crate::model::EmailMessageActivity> {
        self.email.as_ref()
    }
    pub fn holdout(&self) -> std::option::Option<&crate::model::HoldoutActivity> {
        self.holdout.as_ref()
    }
    pub fn push(&self) -> std::option::Option<&crate::model::PushMessageActivity> {
        self.push.as_ref()
    }
    pub fn random_split(&self) -> std::option::Option<&crate::model::RandomSplitActivity> {
        self.random_split.as_ref()
    }
    pub fn sms(&self) -> std::option::Option<&crate::model::SmsMessageActivity> {
        self.sms.as_ref()
    }
    pub fn wait(&self) -> std::option::Option<&crate::model::WaitActivity> {
        self.wait.as_ref()
    }
}
/// See [`Activity`](crate::model::Activity)
pub mod activity {
    /// A builder for [`Activity`](crate::model::Activity)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) email: std::option::Option<crate::model::EmailMessageActivity>,
        pub(crate) holdout: std::option::Option<crate::model::HoldoutActivity>,
        pub(crate) push: std::option::Option<crate::model::PushMessageActivity>,
        pub(crate) random_split: std::option::Option<crate::model::RandomSplitActivity>,
        pub(crate) sms: std::option::Option<crate::model::SmsMessageActivity>,
        pub(crate) wait: std::option::Option<crate::model::WaitActivity>,
    }
    impl Builder {
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        pub fn email(mut self, input: crate::model::EmailMessageActivity) -> Self {
            self.email = Some(input);
            self
        }
        pub fn set_email(mut self, input: std::option::Option<crate::model::EmailMessageActivity>) -> Self {
            self.email = input;
            self
        }
        pub fn holdout(mut self, input: crate::model::HoldoutActivity) -> Self {
            self.holdout = Some(input);
            self
        }
        pub fn set_holdout(mut self, input: std::option::Option<crate::model::HoldoutActivity>) -> Self {
            self.holdout = input;
            self
        }
        pub fn push(mut self, input: crate::model::PushMessageActivity) -> Self {
            self.push = Some(input);
            self
        }
        pub fn set_push(mut self, input: std::option::Option<crate::model::PushMessageActivity>) -> Self {
            self.push = input;
            self
        }
        pub fn random_split(mut self, input: crate::model::RandomSplitActivity) -> Self {
            self.random_split = Some(input);
            self
        }
        pub fn set_random_split(mut self, input: std::option::Option<crate::model::RandomSplitActivity>) -> Self {
            self.random_split = input;
            self
        }
        pub fn sms(mut self, input: crate::model::SmsMessageActivity) -> Self {
            self.sms = Some(input);
            self
        }
        pub fn set_sms(mut self, input: std::option::Option<crate::model::SmsMessageActivity>) -> Self {
            self.sms = input;
            self
        }
        pub fn wait(mut self, input: crate::model::WaitActivity) -> Self {
            self.wait = Some(input);
            self
        }
        pub fn set_wait(mut self, input: std::option::Option<crate::model::WaitActivity>) -> Self {
            self.wait = input;
            self
        }
        /// Consumes the builder and constructs a [`Activity`](crate::model::Activity)
        pub fn build(self) -> crate::model::Activity {
            crate::model::Activity {
                description: self.description,
                email: self.email,
                holdout: self.holdout,
                push: self.push,
                random_split: self.random_split,
                sms: self.sms,
                wait: self.wait,
            }
        }
    }
}
impl Activity {
    /// Creates a new builder-style object to manufacture [`Activity`](crate::model::Activity)
    pub fn builder() -> crate::model::activity::Builder {
        crate::model::activity::Builder::default()
    }
}

/// Specifies the settings for an email activity in a journey.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct EmailMessageActivity {
    #[serde(rename = "MessageConfig", skip_serializing_if = "Option::is_none")]
    pub message_config: std::option::Option<crate::model::JourneyEmailMessage>,
    #[serde(rename = "NextActivity", skip_serializing_if = "Option::is_none")]
    pub next_activity: std::option::Option<std::string::String>,
    #[serde(rename = "TemplateName", skip_serializing_if = "Option::is_none")]
    pub template_name: std::option::Option<std::string::String>,
    #[serde(rename = "TemplateVersion", skip_serializing_if = "Option::is_none")]
    pub template_version: std::option::Option<std::string::String>,
}
impl EmailMessageActivity {
    pub fn message_config(&self) -> std::option::Option<&crate::model::JourneyEmailMessage> {
        self.message_config.as_ref()
    }
    pub fn next_activity(&self) -> std::option::Option<&str> {
        self.next_activity.as_deref()
    }
    pub fn template_name(&self) -> std::option::Option<&str> {
        self.template_name.as_deref()
    }
    pub fn template_version(&self) -> std::option::Option<&str> {
        self.template_version.as_deref()
    }
}
/// See [`EmailMessageActivity`](crate::model::EmailMessageActivity)
pub mod email_message_activity {
    /// A builder for [`EmailMessageActivity`](crate::model::EmailMessageActivity)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message_config: std::option::Option<crate::model::JourneyEmailMessage>,
        pub(crate) next_activity: std::option::Option<std::string::String>,
        pub(crate) template_name: std::option::Option<std::string::String>,
        pub(crate) template_version: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message_config(mut self, input: crate::model::JourneyEmailMessage) -> Self {
            self.message_config = Some(input);
            self
        }
        pub fn set_message_config(mut self, input: std::option::Option<crate::model::JourneyEmailMessage>) -> Self {
            self.message_config = input;
            self
        }
        pub fn next_activity(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_activity = Some(input.into());
            self
        }
        pub fn set_next_activity(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_activity = input;
            self
        }
        pub fn template_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.template_name = Some(input.into());
            self
        }
        pub fn set_template_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.template_name = input;
            self
        }
        pub fn template_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.template_version = Some(input.into());
            self
        }
        pub fn set_template_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.template_version = input;
            self
        }
        /// Consumes the builder and constructs a [`EmailMessageActivity`](crate::model::EmailMessageActivity)
        pub fn build(self) -> crate::model::EmailMessageActivity {
            crate::model::EmailMessageActivity {
                message_config: self.message_config,
                next_activity: self.next_activity,
                template_name: self.template_name,
                template_version: self.template_version,
            }
        }
    }
}
impl EmailMessageActivity {
    /// Creates a new builder-style object to manufacture [`EmailMessageActivity`](crate::model::EmailMessageActivity)
    pub fn builder() -> crate::model::email_message_activity::Builder {
        crate::model::email_message_activity::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct JourneyEmailMessage {
    #[serde(rename = "FromAddress", skip_serializing_if = "Option::is_none")]
    pub from_address: std::option::Option<std::string::String>,
}
impl JourneyEmailMessage {
    pub fn from_address(&self) -> std::option::Option<&str> {
        self.from_address.as_deref()
    }
}
/// See [`JourneyEmailMessage`](crate::model::JourneyEmailMessage)
pub mod journey_email_message {
    /// A builder for [`JourneyEmailMessage`](crate::model::JourneyEmailMessage)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) from_address: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn from_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.from_address = Some(input.into());
            self
        }
        pub fn set_from_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.from_address = input;
            self
        }
        /// Consumes the builder and constructs a [`JourneyEmailMessage`](crate::model::JourneyEmailMessage)
        pub fn build(self) -> crate::model::JourneyEmailMessage {
            crate::model::JourneyEmailMessage {
                from_address: self.from_address,
            }
        }
    }
}
impl JourneyEmailMessage {
    /// Creates a new builder-style object to manufacture [`JourneyEmailMessage`](crate::model::JourneyEmailMessage)
    pub fn builder() -> crate::model::journey_email_message::Builder {
        crate::model::journey_email_message::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct PushMessageActivity {
    #[serde(rename = "MessageConfig", skip_serializing_if = "Option::is_none")]
    pub message_config: std::option::Option<crate::model::JourneyPushMessage>,
    #[serde(rename = "NextActivity", skip_serializing_if = "Option::is_none")]
    pub next_activity: std::option::Option<std::string::String>,
    #[serde(rename = "TemplateName", skip_serializing_if = "Option::is_none")]
    pub template_name: std::option::Option<std::string::String>,
    #[serde(rename = "TemplateVersion", skip_serializing_if = "Option::is_none")]
    pub template_version: std::option::Option<std::string::String>,
}
impl PushMessageActivity {
    pub fn message_config(&self) -> std::option::Option<&crate::model::JourneyPushMessage> {
        self.message_config.as_ref()
    }
    pub fn next_activity(&self) -> std::option::Option<&str> {
        self.next_activity.as_deref()
    }
    pub fn template_name(&self) -> std::option::Option<&str> {
        self.template_name.as_deref()
    }
    pub fn template_version(&self) -> std::option::Option<&str> {
        self.template_version.as_deref()
    }
}
/// See [`PushMessageActivity`](crate::model::PushMessageActivity)
pub mod push_message_activity {
    /// A builder for [`PushMessageActivity`](crate::model::PushMessageActivity)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message_config: std::option::Option<crate::model::JourneyPushMessage>,
        pub(crate) next_activity: std::option::Option<std::string::String>,
        pub(crate) template_name: std::option::Option<std::string::String>,
        pub(crate) template_version: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message_config(mut self, input: crate::model::JourneyPushMessage) -> Self {
            self.message_config = Some(input);
            self
        }
        pub fn set_message_config(mut self, input: std::option::Option<crate::model::JourneyPushMessage>) -> Self {
            self.message_config = input;
            self
        }
        pub fn next_activity(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_activity = Some(input.into());
            self
        }
        pub fn set_next_activity(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_activity = input;
            self
        }
        pub fn template_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.template_name = Some(input.into());
            self
        }
        pub fn set_template_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.template_name = input;
            self
        }
        pub fn template_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.template_version = Some(input.into());
            self
        }
        pub fn set_template_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.template_version = input;
            self
        }
        /// Consumes the builder and constructs a [`PushMessageActivity`](crate::model::PushMessageActivity)
        pub fn build(self) -> crate::model::PushMessageActivity {
            crate::model::PushMessageActivity {
                message_config: self.message_config,
                next_activity: self.next_activity,
                template_name: self.template_name,
                template_version: self.template_version,
            }
        }
    }
}
impl PushMessageActivity {
    /// Creates a new builder-style object to manufacture [`PushMessageActivity`](crate::model::PushMessageActivity)
    pub fn builder() -> crate::model::push_message_activity::Builder {
        crate::model::push_message_activity::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct JourneyPushMessage {
    /// The number of seconds that the push notification service should keep the message, as a
    /// string.
    #[serde(rename = "TimeToLive", skip_serializing_if = "Option::is_none")]
    pub time_to_live: std::option::Option<std::string::String>,
}
impl JourneyPushMessage {
    pub fn time_to_live(&self) -> std::option::Option<&str> {
        self.time_to_live.as_deref()
    }
}
/// See [`JourneyPushMessage`](crate::model::JourneyPushMessage)
pub mod journey_push_message {
    /// A builder for [`JourneyPushMessage`](crate::model::JourneyPushMessage)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) time_to_live: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn time_to_live(mut self, input: impl Into<std::string::String>) -> Self {
            self.time_to_live = Some(input.into());
            self
        }
        pub fn set_time_to_live(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.time_to_live = input;
            self
        }
        /// Consumes the builder and constructs a [`JourneyPushMessage`](crate::model::JourneyPushMessage)
        pub fn build(self) -> crate::model::JourneyPushMessage {
            crate::model::JourneyPushMessage {
                time_to_live: self.time_to_live,
            }
        }
    }
}
impl JourneyPushMessage {
    /// Creates a new builder-style object to manufacture [`JourneyPushMessage`](crate::model::JourneyPushMessage)
    pub fn builder() -> crate::model::journey_push_message::Builder {
        crate::model::journey_push_message::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct SmsMessageActivity {
    #[serde(rename = "MessageConfig", skip_serializing_if = "Option::is_none")]
    pub message_config: std::option::Option<crate::model::JourneySmsMessage>,
    #[serde(rename = "NextActivity", skip_serializing_if = "Option::is_none")]
    pub next_activity: std::option::Option<std::string::String>,
    #[serde(rename = "TemplateName", skip_serializing_if = "Option::is_none")]
    pub template_name: std::option::Option<std::string::String>,
    #[serde(rename = "TemplateVersion", skip_serializing_if = "Option::is_none")]
    pub template_version: std::option::Option<std::string::String>,
}
impl SmsMessageActivity {
    pub fn message_config(&self) -> std::option::Option<&crate::model::JourneySmsMessage> {
        self.message_config.as_ref()
    }
    pub fn next_activity(&self) -> std::option::Option<&str> {
        self.next_activity.as_deref()
    }
    pub fn template_name(&self) -> std::option::Option<&str> {
        self.template_name.as_deref()
    }
    pub fn template_version(&self) -> std::option::Option<&str> {
        self.template_version.as_deref()
    }
}
/// See [`SmsMessageActivity`](crate::model::SmsMessageActivity)
pub mod sms_message_activity {
    /// A builder for [`SmsMessageActivity`](crate::model::SmsMessageActivity)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message_config: std::option::Option<crate::model::JourneySmsMessage>,
        pub(crate) next_activity: std::option::Option<std::string::String>,
        pub(crate) template_name: std::option::Option<std::string::String>,
        pub(crate) template_version: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message_config(mut self, input: crate::model::JourneySmsMessage) -> Self {
            self.message_config = Some(input);
            self
        }
        pub fn set_message_config(mut self, input: std::option::Option<crate::model::JourneySmsMessage>) -> Self {
            self.message_config = input;
            self
        }
        pub fn next_activity(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_activity = Some(input.into());
            self
        }
        pub fn set_next_activity(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_activity = input;
            self
        }
        pub fn template_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.template_name = Some(input.into());
            self
        }
        pub fn set_template_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.template_name = input;
            self
        }
        pub fn template_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.template_version = Some(input.into());
            self
        }
        pub fn set_template_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.template_version = input;
            self
        }
        /// Consumes the builder and constructs a [`SmsMessageActivity`](crate::model::SmsMessageActivity)
        pub fn build(self) -> crate::model::SmsMessageActivity {
            crate::model::SmsMessageActivity {
                message_config: self.message_config,
                next_activity: self.next_activity,
                template_name: self.template_name,
                template_version: self.template_version,
            }
        }
    }
}
impl SmsMessageActivity {
    /// Creates a new builder-style object to manufacture [`SmsMessageActivity`](crate::model::SmsMessageActivity)
    pub fn builder() -> crate::model::sms_message_activity::Builder {
        crate::model::sms_message_activity::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct JourneySmsMessage {
    #[serde(rename = "MessageType", skip_serializing_if = "Option::is_none")]
    pub message_type: std::option::Option<crate::model::MessageType>,
    #[serde(rename = "OriginationNumber", skip_serializing_if = "Option::is_none")]
    pub origination_number: std::option::Option<std::string::String>,
    #[serde(rename = "SenderId", skip_serializing_if = "Option::is_none")]
    pub sender_id: std::option::Option<std::string::String>,
}
impl JourneySmsMessage {
    pub fn message_type(&self) -> std::option::Option<&crate::model::MessageType> {
        self.message_type.as_ref()
    }
    pub fn origination_number(&self) -> std::option::Option<&str> {
        self.origination_number.as_deref()
    }
    pub fn sender_id(&self) -> std::option::Option<&str> {
        self.sender_id.as_deref()
    }
}
/// See [`JourneySmsMessage`](crate::model::JourneySmsMessage)
pub mod journey_sms_message {
    /// A builder for [`JourneySmsMessage`](crate::model::JourneySmsMessage)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message_type: std::option::Option<crate::model::MessageType>,
        pub(crate) origination_number: std::option::Option<std::string::String>,
        pub(crate) sender_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message_type(mut self, input: crate::model::MessageType) -> Self {
            self.message_type = Some(input);
            self
        }
        pub fn set_message_type(mut self, input: std::option::Option<crate::model::MessageType>) -> Self {
            self.message_type = input;
            self
        }
        pub fn origination_number(mut self, input: impl Into<std::string::String>) -> Self {
            self.origination_number = Some(input.into());
            self
        }
        pub fn set_origination_number(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.origination_number = input;
            self
        }
        pub fn sender_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.sender_id = Some(input.into());
            self
        }
        pub fn set_sender_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.sender_id = input;
            self
        }
        /// Consumes the builder and constructs a [`JourneySmsMessage`](crate::model::JourneySmsMessage)
        pub fn build(self) -> crate::model::JourneySmsMessage {
            crate::model::JourneySmsMessage {
                message_type: self.message_type,
                origination_number: self.origination_number,
                sender_id: self.sender_id,
            }
        }
    }
}
impl JourneySmsMessage {
    /// Creates a new builder-style object to manufacture [`JourneySmsMessage`](crate::model::JourneySmsMessage)
    pub fn builder() -> crate::model::journey_sms_message::Builder {
        crate::model::journey_sms_message::Builder::default()
    }
}

/// Specifies the settings for a holdout activity in a journey. This type of activity stops a
/// journey for a specified percentage of participants.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct HoldoutActivity {
    #[serde(rename = "NextActivity", skip_serializing_if = "Option::is_none")]
    pub next_activity: std::option::Option<std::string::String>,
    #[serde(rename = "Percentage", skip_serializing_if = "Option::is_none")]
    pub percentage: std::option::Option<i32>,
}
impl HoldoutActivity {
    pub fn next_activity(&self) -> std::option::Option<&str> {
        self.next_activity.as_deref()
    }
    pub fn percentage(&self) -> std::option::Option<i32> {
        self.percentage
    }
}
/// See [`HoldoutActivity`](crate::model::HoldoutActivity)
pub mod holdout_activity {
    /// A builder for [`HoldoutActivity`](crate::model::HoldoutActivity)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) next_activity: std::option::Option<std::string::String>,
        pub(crate) percentage: std::option::Option<i32>,
    }
    impl Builder {
        pub fn next_activity(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_activity = Some(input.into());
            self
        }
        pub fn set_next_activity(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_activity = input;
            self
        }
        pub fn percentage(mut self, input: i32) -> Self {
            self.percentage = Some(input);
            self
        }
        pub fn set_percentage(mut self, input: std::option::Option<i32>) -> Self {
            self.percentage = input;
            self
        }
        /// Consumes the builder and constructs a [`HoldoutActivity`](crate::model::HoldoutActivity)
        pub fn build(self) -> crate::model::HoldoutActivity {
            crate::model::HoldoutActivity {
                next_activity: self.next_activity,
                percentage: self.percentage,
            }
        }
    }
}
impl HoldoutActivity {
    /// Creates a new builder-style object to manufacture [`HoldoutActivity`](crate::model::HoldoutActivity)
    pub fn builder() -> crate::model::holdout_activity::Builder {
        crate::model::holdout_activity::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct RandomSplitActivity {
    #[serde(rename = "Branches", skip_serializing_if = "Option::is_none")]
    pub branches: std::option::Option<std::vec::Vec<crate::model::RandomSplitEntry>>,
}
impl RandomSplitActivity {
    pub fn branches(&self) -> std::option::Option<&[crate::model::RandomSplitEntry]> {
        self.branches.as_deref()
    }
}
/// See [`RandomSplitActivity`](crate::model::RandomSplitActivity)
pub mod random_split_activity {
    /// A builder for [`RandomSplitActivity`](crate::model::RandomSplitActivity)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) branches: std::option::Option<std::vec::Vec<crate::model::RandomSplitEntry>>,
    }
    impl Builder {
        /// Appends an item to `branches`.
        ///
        /// To override the contents of this collection use [`set_branches`](Self::set_branches).
        pub fn branches(mut self, input: impl Into<crate::model::RandomSplitEntry>) -> Self {
            let mut v = self.branches.unwrap_or_default();
            v.push(input.into());
            self.branches = Some(v);
            self
        }
        pub fn set_branches(mut self, input: std::option::Option<std::vec::Vec<crate::model::RandomSplitEntry>>) -> Self {
            self.branches = input;
            self
        }
        /// Consumes the builder and constructs a [`RandomSplitActivity`](crate::model::RandomSplitActivity)
        pub fn build(self) -> crate::model::RandomSplitActivity {
            crate::model::RandomSplitActivity {
                branches: self.branches,
            }
        }
    }
}
impl RandomSplitActivity {
    /// Creates a new builder-style object to manufacture [`RandomSplitActivity`](crate::model::RandomSplitActivity)
    pub fn builder() -> crate::model::random_split_activity::Builder {
        crate::model::random_split_activity::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct RandomSplitEntry {
    #[serde(rename = "NextActivity", skip_serializing_if = "Option::is_none")]
    pub next_activity: std::option::Option<std::string::String>,
    #[serde(rename = "Percentage", skip_serializing_if = "Option::is_none")]
    pub percentage: std::option::Option<i32>,
}
impl RandomSplitEntry {
    pub fn next_activity(&self) -> std::option::Option<&str> {
        self.next_activity.as_deref()
    }
    pub fn percentage(&self) -> std::option::Option<i32> {
        self.percentage
    }
}
/// See [`RandomSplitEntry`](crate::model::RandomSplitEntry)
pub mod random_split_entry {
    /// A builder for [`RandomSplitEntry`](crate::model::RandomSplitEntry)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) next_activity: std::option::Option<std::string::String>,
        pub(crate) percentage: std::option::Option<i32>,
    }
    impl Builder {
        pub fn next_activity(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_activity = Some(input.into());
            self
        }
        pub fn set_next_activity(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_activity = input;
            self
        }
        pub fn percentage(mut self, input: i32) -> Self {
            self.percentage = Some(input);
            self
        }
        pub fn set_percentage(mut self, input: std::option::Option<i32>) -> Self {
            self.percentage = input;
            self
        }
        /// Consumes the builder and constructs a [`RandomSplitEntry`](crate::model::RandomSplitEntry)
        pub fn build(self) -> crate::model::RandomSplitEntry {
            crate::model::RandomSplitEntry {
                next_activity: self.next_activity,
                percentage: self.percentage,
            }
        }
    }
}
impl RandomSplitEntry {
    /// Creates a new builder-style object to manufacture [`RandomSplitEntry`](crate::model::RandomSplitEntry)
    pub fn builder() -> crate::model::random_split_entry::Builder {
        crate::model::random_split_entry::Builder::default()
    }
}

/// Specifies the settings for a wait activity in a journey.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct WaitActivity {
    #[serde(rename = "NextActivity", skip_serializing_if = "Option::is_none")]
    pub next_activity: std::option::Option<std::string::String>,
    #[serde(rename = "WaitTime", skip_serializing_if = "Option::is_none")]
    pub wait_time: std::option::Option<crate::model::WaitTime>,
}
impl WaitActivity {
    pub fn next_activity(&self) -> std::option::Option<&str> {
        self.next_activity.as_deref()
    }
    pub fn wait_time(&self) -> std::option::Option<&crate::model::WaitTime> {
        self.wait_time.as_ref()
    }
}
/// See [`WaitActivity`](crate::model::WaitActivity)
pub mod wait_activity {
    /// A builder for [`WaitActivity`](crate::model::WaitActivity)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) next_activity: std::option::Option<std::string::String>,
        pub(crate) wait_time: std::option::Option<crate::model::WaitTime>,
    }
    impl Builder {
        pub fn next_activity(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_activity = Some(input.into());
            self
        }
        pub fn set_next_activity(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_activity = input;
            self
        }
        pub fn wait_time(mut self, input: crate::model::WaitTime) -> Self {
            self.wait_time = Some(input);
            self
        }
        pub fn set_wait_time(mut self, input: std::option::Option<crate::model::WaitTime>) -> Self {
            self.wait_time = input;
            self
        }
        /// Consumes the builder and constructs a [`WaitActivity`](crate::model::WaitActivity)
        pub fn build(self) -> crate::model::WaitActivity {
            crate::model::WaitActivity {
                next_activity: self.next_activity,
                wait_time: self.wait_time,
            }
        }
    }
}
impl WaitActivity {
    /// Creates a new builder-style object to manufacture [`WaitActivity`](crate::model::WaitActivity)
    pub fn builder() -> crate::model::wait_activity::Builder {
        crate::model::wait_activity::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct WaitTime {
    /// The amount of time to wait, as a duration in ISO 8601 format, before determining whether the
    /// activity's conditions have been met.
    #[serde(rename = "WaitFor", skip_serializing_if = "Option::is_none")]
    pub wait_for: std::option::Option<std::string::String>,
    /// The date and time, in ISO 8601 format, when Amazon Pinpoint determines whether the
    /// activity's conditions have been met.
    #[serde(rename = "WaitUntil", skip_serializing_if = "Option::is_none")]
    pub wait_until: std::option::Option<std::string::String>,
}
impl WaitTime {
    pub fn wait_for(&self) -> std::option::Option<&str> {
        self.wait_for.as_deref()
    }
    pub fn wait_until(&self) -> std::option::Option<&str> {
        self.wait_until.as_deref()
    }
}
/// See [`WaitTime`](crate::model::WaitTime)
pub mod wait_time {
    /// A builder for [`WaitTime`](crate::model::WaitTime)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) wait_for: std::option::Option<std::string::String>,
        pub(crate) wait_until: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn wait_for(mut self, input: impl Into<std::string::String>) -> Self {
            self.wait_for = Some(input.into());
            self
        }
        pub fn set_wait_for(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.wait_for = input;
            self
        }
        pub fn wait_until(mut self, input: impl Into<std::string::String>) -> Self {
            self.wait_until = Some(input.into());
            self
        }
        pub fn set_wait_until(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.wait_until = input;
            self
        }
        /// Consumes the builder and constructs a [`WaitTime`](crate::model::WaitTime)
        pub fn build(self) -> crate::model::WaitTime {
            crate::model::WaitTime {
                wait_for: self.wait_for,
                wait_until: self.wait_until,
            }
        }
    }
}
impl WaitTime {
    /// Creates a new builder-style object to manufacture [`WaitTime`](crate::model::WaitTime)
    pub fn builder() -> crate::model::wait_time::Builder {
        crate::model::wait_time::Builder::default()
    }
}

/// Provides the results of a query that retrieved the data for a standard execution metric that
/// applies to a journey.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct JourneyExecutionMetricsResponse {
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub application_id: std::option::Option<std::string::String>,
    #[serde(rename = "JourneyId", skip_serializing_if = "Option::is_none")]
    pub journey_id: std::option::Option<std::string::String>,
    #[serde(rename = "LastEvaluatedTime", skip_serializing_if = "Option::is_none")]
    pub last_evaluated_time: std::option::Option<std::string::String>,
    /// A JSON object that contains the results of the query. The keys are metric names and the
    /// values are counts, as strings.
    #[serde(rename = "Metrics", skip_serializing_if = "Option::is_none")]
    pub metrics: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
impl JourneyExecutionMetricsResponse {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn journey_id(&self) -> std::option::Option<&str> {
        self.journey_id.as_deref()
    }
    pub fn last_evaluated_time(&self) -> std::option::Option<&str> {
        self.last_evaluated_time.as_deref()
    }
    pub fn metrics(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.metrics.as_ref()
    }
}
/// See [`JourneyExecutionMetricsResponse`](crate::model::JourneyExecutionMetricsResponse)
pub mod journey_execution_metrics_response {
    /// A builder for [`JourneyExecutionMetricsResponse`](crate::model::JourneyExecutionMetricsResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) journey_id: std::option::Option<std::string::String>,
        pub(crate) last_evaluated_time: std::option::Option<std::string::String>,
        pub(crate) metrics: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn journey_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.journey_id = Some(input.into());
            self
        }
        pub fn set_journey_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.journey_id = input;
            self
        }
        pub fn last_evaluated_time(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_evaluated_time = Some(input.into());
            self
        }
        pub fn set_last_evaluated_time(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.last_evaluated_time = input;
            self
        }
        /// Adds a key-value pair to `metrics`.
        ///
        /// To override the contents of this collection use [`set_metrics`](Self::set_metrics).
        pub fn metrics(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.metrics.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.metrics = Some(hash_map);
            self
        }
        pub fn set_metrics(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.metrics = input;
            self
        }
        /// Consumes the builder and constructs a [`JourneyExecutionMetricsResponse`](crate::model::JourneyExecutionMetricsResponse)
        pub fn build(self) -> crate::model::JourneyExecutionMetricsResponse {
            crate::model::JourneyExecutionMetricsResponse {
                application_id: self.application_id,
                journey_id: self.journey_id,
                last_evaluated_time: self.last_evaluated_time,
                metrics: self.metrics,
            }
        }
    }
}
impl JourneyExecutionMetricsResponse {
    /// Creates a new builder-style object to manufacture [`JourneyExecutionMetricsResponse`](crate::model::JourneyExecutionMetricsResponse)
    pub fn builder() -> crate::model::journey_execution_metrics_response::Builder {
        crate::model::journey_execution_metrics_response::Builder::default()
    }
}

/// Specifies the content and settings for a message template that can be used in messages that are
/// sent through the email channel.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct EmailTemplateRequest {
    /// A JSON object that specifies the default values to use for message variables in the message
    /// template.
    #[serde(rename = "DefaultSubstitutions", skip_serializing_if = "Option::is_none")]
    pub default_substitutions: std::option::Option<std::string::String>,
    #[serde(rename = "HtmlPart", skip_serializing_if = "Option::is_none")]
    pub html_part: std::option::Option<std::string::String>,
    #[serde(rename = "RecommenderId", skip_serializing_if = "Option::is_none")]
    pub recommender_id: std::option::Option<std::string::String>,
    #[serde(rename = "Subject", skip_serializing_if = "Option::is_none")]
    pub subject: std::option::Option<std::string::String>,
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "TemplateDescription", skip_serializing_if = "Option::is_none")]
    pub template_description: std::option::Option<std::string::String>,
    #[serde(rename = "TextPart", skip_serializing_if = "Option::is_none")]
    pub text_part: std::option::Option<std::string::String>,
}
impl EmailTemplateRequest {
    pub fn default_substitutions(&self) -> std::option::Option<&str> {
        self.default_substitutions.as_deref()
    }
    pub fn html_part(&self) -> std::option::Option<&str> {
        self.html_part.as_deref()
    }
    pub fn recommender_id(&self) -> std::option::Option<&str> {
        self.recommender_id.as_deref()
    }
    pub fn subject(&self) -> std::option::Option<&str> {
        self.subject.as_deref()
    }
    pub fn tags(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.tags.as_ref()
    }
    pub fn template_description(&self) -> std::option::Option<&str> {
        self.template_description.as_deref()
    }
    pub fn text_part(&self) -> std::option::Option<&str> {
        self.text_part.as_deref()
    }
}
/// See [`EmailTemplateRequest`](crate::model::EmailTemplateRequest)
pub mod email_template_request {
    /// A builder for [`EmailTemplateRequest`](crate::model::EmailTemplateRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) default_substitutions: std::option::Option<std::string::String>,
        pub(crate) html_part: std::option::Option<std::string::String>,
        pub(crate) recommender_id: std::option::Option<std::string::String>,
        pub(crate) subject: std::option::Option<std::string::String>,
        pub(crate) tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) template_description: std::option::Option<std::string::String>,
        pub(crate) text_part: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn default_substitutions(mut self, input: impl Into<std::string::String>) -> Self {
            self.default_substitutions = Some(input.into());
            self
        }
        pub fn set_default_substitutions(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.default_substitutions = input;
            self
        }
        pub fn html_part(mut self, input: impl Into<std::string::String>) -> Self {
            self.html_part = Some(input.into());
            self
        }
        pub fn set_html_part(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.html_part = input;
            self
        }
        pub fn recommender_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.recommender_id = Some(input.into());
            self
        }
        pub fn set_recommender_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.recommender_id = input;
            self
        }
        pub fn subject(mut self, input: impl Into<std::string::String>) -> Self {
            self.subject = Some(input.into());
            self
        }
        pub fn set_subject(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.subject = input;
            self
        }
        /// Adds a key-value pair to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        pub fn template_description(mut self, input: impl Into<std::string::String>) -> Self {
            self.template_description = Some(input.into());
            self
        }
        pub fn set_template_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.template_description = input;
            self
        }
        pub fn text_part(mut self, input: impl Into<std::string::String>) -> Self {
            self.text_part = Some(input.into());
            self
        }
        pub fn set_text_part(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.text_part = input;
            self
        }
        /// Consumes the builder and constructs a [`EmailTemplateRequest`](crate::model::EmailTemplateRequest)
        pub fn build(self) -> crate::model::EmailTemplateRequest {
            crate::model::EmailTemplateRequest {
                default_substitutions: self.default_substitutions,
                html_part: self.html_part,
                recommender_id: self.recommender_id,
                subject: self.subject,
                tags: self.tags,
                template_description: self.template_description,
                text_part: self.text_part,
            }
        }
    }
}
impl EmailTemplateRequest {
    /// Creates a new builder-style object to manufacture [`EmailTemplateRequest`](crate::model::EmailTemplateRequest)
    pub fn builder() -> crate::model::email_template_request::Builder {
        crate::model::email_template_request::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct EmailTemplateResponse {
    #[serde(rename = "Arn", skip_serializing_if = "Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub creation_date: std::option::Option<std::string::String>,
    #[serde(rename = "DefaultSubstitutions", skip_serializing_if = "Option::is_none")]
    pub default_substitutions: std::option::Option<std::string::String>,
    #[serde(rename = "HtmlPart", skip_serializing_if = "Option::is_none")]
    pub html_part: std::option::Option<std::string::String>,
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub last_modified_date: std::option::Option<std::string::String>,
    #[serde(rename = "RecommenderId", skip_serializing_if = "Option::is_none")]
    pub recommender_id: std::option::Option<std::string::String>,
    #[serde(rename = "Subject", skip_serializing_if = "Option::is_none")]
    pub subject: std::option::Option<std::string::String>,
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "TemplateDescription", skip_serializing_if = "Option::is_none")]
    pub template_description: std::option::Option<std::string::String>,
    #[serde(rename = "TemplateName", skip_serializing_if = "Option::is_none")]
    pub template_name: std::option::Option<std::string::String>,
    #[serde(rename = "TemplateType", skip_serializing_if = "Option::is_none")]
    pub template_type: std::option::Option<crate::model::TemplateType>,
    #[serde(rename = "TextPart", skip_serializing_if = "Option::is_none")]
    pub text_part: std::option::Option<std::string::String>,
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub version: std::option::Option<std::string::String>,
}
impl EmailTemplateResponse {
    pub fn arn(&self) -> std::option::Option<&str> {
        self.arn.as_deref()
    }
    pub fn creation_date(&self) -> std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    pub fn default_substitutions(&self) -> std::option::Option<&str> {
        self.default_substitutions.as_deref()
    }
    pub fn html_part(&self) -> std::option::Option<&str> {
        self.html_part.as_deref()
    }
    pub fn last_modified_date(&self) -> std::option::Option<&str> {
        self.last_modified_date.as_deref()
    }
    pub fn recommender_id(&self) -> std::option::Option<&str> {
        self.recommender_id.as_deref()
    }
    pub fn subject(&self) -> std::option::Option<&str> {
        self.subject.as_deref()
    }
    pub fn tags(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.tags.as_ref()
    }
    pub fn template_description(&self) -> std::option::Option<&str> {
        self.template_description.as_deref()
    }
    pub fn template_name(&self) -> std::option::Option<&str> {
        self.template_name.as_deref()
    }
    pub fn template_type(&self) -> std::option::Option<&crate::model::TemplateType> {
        self.template_type.as_ref()
    }
    pub fn text_part(&self) -> std::option::Option<&str> {
        self.text_part.as_deref()
    }
    pub fn version(&self) -> std::option::Option<&str> {
        self.version.as_deref()
    }
}
/// See [`EmailTemplateResponse`](crate::model::EmailTemplateResponse)
pub mod email_template_response {
    /// A builder for [`EmailTemplateResponse`](crate::model::EmailTemplateResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: std::option::Option<std::string::String>,
        pub(crate) creation_date: std::option::Option<std::string::String>,
        pub(crate) default_substitutions: std::option::Option<std::string::String>,
        pub(crate) html_part: std::option::Option<std::string::String>,
        pub(crate) last_modified_date: std::option::Option<std::string::String>,
        pub(crate) recommender_id: std::option::Option<std::string::String>,
        pub(crate) subject: std::option::Option<std::string::String>,
        pub(crate) tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) template_description: std::option::Option<std::string::String>,
        pub(crate) template_name: std::option::Option<std::string::String>,
        pub(crate) template_type: std::option::Option<crate::model::TemplateType>,
        pub(crate) text_part: std::option::Option<std::string::String>,
        pub(crate) version: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        pub fn creation_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.creation_date = Some(input.into());
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creation_date = input;
            self
        }
        pub fn default_substitutions(mut self, input: impl Into<std::string::String>) -> Self {
            self.default_substitutions = Some(input.into());
            self
        }
        pub fn set_default_substitutions(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.default_substitutions = input;
            self
        }
        pub fn html_part(mut self, input: impl Into<std::string::String>) -> Self {
            self.html_part = Some(input.into());
            self
        }
        pub fn set_html_part(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.html_part = input;
            self
        }
        pub fn last_modified_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_modified_date = Some(input.into());
            self
        }
        pub fn set_last_modified_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.last_modified_date = input;
            self
        }
        pub fn recommender_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.recommender_id = Some(input.into());
            self
        }
        pub fn set_recommender_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.recommender_id = input;
            self
        }
        pub fn subject(mut self, input: impl Into<std::string::String>) -> Self {
            self.subject = Some(input.into());
            self
        }
        pub fn set_subject(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.subject = input;
            self
        }
        /// Adds a key-value pair to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        pub fn template_description(mut self, input: impl Into<std::string::String>) -> Self {
            self.template_description = Some(input.into());
            self
        }
        pub fn set_template_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.template_description = input;
            self
        }
        pub fn template_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.template_name = Some(input.into());
            self
        }
        pub fn set_template_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.template_name = input;
            self
        }
        pub fn template_type(mut self, input: crate::model::TemplateType) -> Self {
            self.template_type = Some(input);
            self
        }
        pub fn set_template_type(mut self, input: std::option::Option<crate::model::TemplateType>) -> Self {
            self.template_type = input;
            self
        }
        pub fn text_part(mut self, input: impl Into<std::string::String>) -> Self {
            self.text_part = Some(input.into());
            self
        }
        pub fn set_text_part(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.text_part = input;
            self
        }
        pub fn version(mut self, input: impl Into<std::string::String>) -> Self {
            self.version = Some(input.into());
            self
        }
        pub fn set_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.version = input;
            self
        }
        /// Consumes the builder and constructs a [`EmailTemplateResponse`](crate::model::EmailTemplateResponse)
        pub fn build(self) -> crate::model::EmailTemplateResponse {
            crate::model::EmailTemplateResponse {
                arn: self.arn,
                creation_date: self.creation_date,
                default_substitutions: self.default_substitutions,
                html_part: self.html_part,
                last_modified_date: self.last_modified_date,
                recommender_id: self.recommender_id,
                subject: self.subject,
                tags: self.tags,
                template_description: self.template_description,
                template_name: self.template_name,
                template_type: self.template_type,
                text_part: self.text_part,
                version: self.version,
            }
        }
    }
}
impl EmailTemplateResponse {
    /// Creates a new builder-style object to manufacture [`EmailTemplateResponse`](crate::model::EmailTemplateResponse)
    pub fn builder() -> crate::model::email_template_response::Builder {
        crate::model::email_template_response::Builder::default()
    }
}

/// Provides information about a request to create a message template.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct CreateTemplateMessageBody {
    #[serde(rename = "Arn", skip_serializing_if = "Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    pub message: std::option::Option<std::string::String>,
    #[serde(rename = "RequestID", skip_serializing_if = "Option::is_none")]
    pub request_id: std::option::Option<std::string::String>,
}
impl CreateTemplateMessageBody {
    pub fn arn(&self) -> std::option::Option<&str> {
        self.arn.as_deref()
    }
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
    pub fn request_id(&self) -> std::option::Option<&str> {
        self.request_id.as_deref()
    }
}
/// See [`CreateTemplateMessageBody`](crate::model::CreateTemplateMessageBody)
pub mod create_template_message_body {
    /// A builder for [`CreateTemplateMessageBody`](crate::model::CreateTemplateMessageBody)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: std::option::Option<std::string::String>,
        pub(crate) message: std::option::Option<std::string::String>,
        pub(crate) request_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateTemplateMessageBody`](crate::model::CreateTemplateMessageBody)
        pub fn build(self) -> crate::model::CreateTemplateMessageBody {
            crate::model::CreateTemplateMessageBody {
                arn: self.arn,
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}
impl CreateTemplateMessageBody {
    /// Creates a new builder-style object to manufacture [`CreateTemplateMessageBody`](crate::model::CreateTemplateMessageBody)
    pub fn builder() -> crate::model::create_template_message_body::Builder {
        crate::model::create_template_message_body::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct TemplatesResponse {
    #[serde(rename = "Item", skip_serializing_if = "Option::is_none")]
    pub item: std::option::Option<std::vec::Vec<crate::model::TemplateResponse>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl TemplatesResponse {
    pub fn item(&self) -> std::option::Option<&[crate::model::TemplateResponse]> {
        self.item.as_deref()
    }
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
/// See [`TemplatesResponse`](crate::model::TemplatesResponse)
pub mod templates_response {
    /// A builder for [`TemplatesResponse`](crate::model::TemplatesResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) item: std::option::Option<std::vec::Vec<crate::model::TemplateResponse>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `item`.
        ///
        /// To override the contents of this collection use [`set_item`](Self::set_item).
        pub fn item(mut self, input: impl Into<crate::model::TemplateResponse>) -> Self {
            let mut v = self.item.unwrap_or_default();
            v.push(input.into());
            self.item = Some(v);
            self
        }
        pub fn set_item(mut self, input: std::option::Option<std::vec::Vec<crate::model::TemplateResponse>>) -> Self {
            self.item = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`TemplatesResponse`](crate::model::TemplatesResponse)
        pub fn build(self) -> crate::model::TemplatesResponse {
            crate::model::TemplatesResponse {
                item: self.item,
                next_token: self.next_token,
            }
        }
    }
}
impl TemplatesResponse {
    /// Creates a new builder-style object to manufacture [`TemplatesResponse`](crate::model::TemplatesResponse)
    pub fn builder() -> crate::model::templates_response::Builder {
        crate::model::templates_response::Builder::default()
    }
}

/// Provides information about a message template that's associated with your Amazon Pinpoint
/// account.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct TemplateResponse {
    #[serde(rename = "Arn", skip_serializing_if = "Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub creation_date: std::option::Option<std::string::String>,
    #[serde(rename = "DefaultSubstitutions", skip_serializing_if = "Option::is_none")]
    pub default_substitutions: std::option::Option<std::string::String>,
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub last_modified_date: std::option::Option<std::string::String>,
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "TemplateDescription", skip_serializing_if = "Option::is_none")]
    pub template_description: std::option::Option<std::string::String>,
    #[serde(rename = "TemplateName", skip_serializing_if = "Option::is_none")]
    pub template_name: std::option::Option<std::string::String>,
    #[serde(rename = "TemplateType", skip_serializing_if = "Option::is_none")]
    pub template_type: std::option::Option<crate::model::TemplateType>,
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub version: std::option::Option<std::string::String>,
}
impl TemplateResponse {
    pub fn arn(&self) -> std::option::Option<&str> {
        self.arn.as_deref()
    }
    pub fn creation_date(&self) -> std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    pub fn default_substitutions(&self) -> std::option::Option<&str> {
        self.default_substitutions.as_deref()
    }
    pub fn last_modified_date(&self) -> std::option::Option<&str> {
        self.last_modified_date.as_deref()
    }
    pub fn tags(&self) -> std::option::Option<&std::collections::HashMap<std::string::String, std::string::String>> {
        self.tags.as_ref()
    }
    pub fn template_description(&self) -> std::option::Option<&str> {
        self.template_description.as_deref()
    }
    pub fn template_name(&self) -> std::option::Option<&str> {
        self.template_name.as_deref()
    }
    pub fn template_type(&self) -> std::option::Option<&crate::model::TemplateType> {
        self.template_type.as_ref()
    }
    pub fn version(&self) -> std::option::Option<&str> {
        self.version.as_deref()
    }
}
/// See [`TemplateResponse`](crate::model::TemplateResponse)
pub mod template_response {
    /// A builder for [`TemplateResponse`](crate::model::TemplateResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: std::option::Option<std::string::String>,
        pub(crate) creation_date: std::option::Option<std::string::String>,
        pub(crate) default_substitutions: std::option::Option<std::string::String>,
        pub(crate) last_modified_date: std::option::Option<std::string::String>,
        pub(crate) tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) template_description: std::option::Option<std::string::String>,
        pub(crate) template_name: std::option::Option<std::string::String>,
        pub(crate) template_type: std::option::Option<crate::model::TemplateType>,
        pub(crate) version: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        pub fn creation_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.creation_date = Some(input.into());
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creation_date = input;
            self
        }
        pub fn default_substitutions(mut self, input: impl Into<std::string::String>) -> Self {
            self.default_substitutions = Some(input.into());
            self
        }
        pub fn set_default_substitutions(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.default_substitutions = input;
            self
        }
        pub fn last_modified_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_modified_date = Some(input.into());
            self
        }
        pub fn set_last_modified_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.last_modified_date = input;
            self
        }
        /// Adds a key-value pair to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        pub fn template_description(mut self, input: impl Into<std::string::String>) -> Self {
            self.template_description = Some(input.into());
            self
        }
        pub fn set_template_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.template_description = input;
            self
        }
        pub fn template_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.template_name = Some(input.into());
            self
        }
        pub fn set_template_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.template_name = input;
            self
        }
        pub fn template_type(mut self, input: crate::model::TemplateType) -> Self {
            self.template_type = Some(input);
            self
        }
        pub fn set_template_type(mut self, input: std::option::Option<crate::model::TemplateType>) -> Self {
            self.template_type = input;
            self
        }
        pub fn version(mut self, input: impl Into<std::string::String>) -> Self {
            self.version = Some(input.into());
            self
        }
        pub fn set_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.version = input;
            self
        }
        /// Consumes the builder and constructs a [`TemplateResponse`](crate::model::TemplateResponse)
        pub fn build(self) -> crate::model::TemplateResponse {
            crate::model::TemplateResponse {
                arn: self.arn,
                creation_date: self.creation_date,
                default_substitutions: self.default_substitutions,
                last_modified_date: self.last_modified_date,
                tags: self.tags,
                template_description: self.template_description,
                template_name: self.template_name,
                template_type: self.template_type,
                version: self.version,
            }
        }
    }
}
impl TemplateResponse {
    /// Creates a new builder-style object to manufacture [`TemplateResponse`](crate::model::TemplateResponse)
    pub fn builder() -> crate::model::template_response::Builder {
        crate::model::template_response::Builder::default()
    }
}
