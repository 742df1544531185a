/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Creates a new campaign for an application or updates the settings of an existing campaign for an
/// application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateCampaign {
    _private: (),
}
impl CreateCampaign {
    /// Creates a new builder-style object to manufacture [`CreateCampaignInput`](crate::input::CreateCampaignInput)
    pub fn builder() -> crate::input::create_campaign_input::Builder {
        crate::input::create_campaign_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateCampaign {
    type Output = std::result::Result<crate::output::CreateCampaignOutput, crate::error::CreateCampaignError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::CreateCampaignError::from_response(response));
        }
        let campaign_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::CreateCampaignError::unhandled)?;
        Ok(crate::output::CreateCampaignOutput::builder()
            .set_campaign_response(campaign_response)
            .build())
    }
}

/// Creates an import job for an application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateImportJob {
    _private: (),
}
impl CreateImportJob {
    /// Creates a new builder-style object to manufacture [`CreateImportJobInput`](crate::input::CreateImportJobInput)
    pub fn builder() -> crate::input::create_import_job_input::Builder {
        crate::input::create_import_job_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateImportJob {
    type Output = std::result::Result<crate::output::CreateImportJobOutput, crate::error::CreateImportJobError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::CreateImportJobError::from_response(response));
        }
        let import_job_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::CreateImportJobError::unhandled)?;
        Ok(crate::output::CreateImportJobOutput::builder()
            .set_import_job_response(import_job_response)
            .build())
    }
}

/// Creates a new segment for an application or updates the configuration, dimension, and other
/// settings for an existing segment that's associated with an application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateSegment {
    _private: (),
}
impl CreateSegment {
    /// Creates a new builder-style object to manufacture [`CreateSegmentInput`](crate::input::CreateSegmentInput)
    pub fn builder() -> crate::input::create_segment_input::Builder {
        crate::input::create_segment_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateSegment {
    type Output = std::result::Result<crate::output::CreateSegmentOutput, crate::error::CreateSegmentError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::CreateSegmentError::from_response(response));
        }
        let segment_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::CreateSegmentError::unhandled)?;
        Ok(crate::output::CreateSegmentOutput::builder()
            .set_segment_response(segment_response)
            .build())
    }
}

/// Disables the APNs channel for an application and deletes any existing settings for the channel.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteApnsChannel {
    _private: (),
}
impl DeleteApnsChannel {
    /// Creates a new builder-style object to manufacture [`DeleteApnsChannelInput`](crate::input::DeleteApnsChannelInput)
    pub fn builder() -> crate::input::delete_apns_channel_input::Builder {
        crate::input::delete_apns_channel_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteApnsChannel {
    type Output = std::result::Result<crate::output::DeleteApnsChannelOutput, crate::error::DeleteApnsChannelError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::DeleteApnsChannelError::from_response(response));
        }
        let apns_channel_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::DeleteApnsChannelError::unhandled)?;
        Ok(crate::output::DeleteApnsChannelOutput::builder()
            .set_apns_channel_response(apns_channel_response)
            .build())
    }
}

/// Deletes a campaign from an application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteCampaign {
    _private: (),
}
impl DeleteCampaign {
    /// Creates a new builder-style object to manufacture [`DeleteCampaignInput`](crate::input::DeleteCampaignInput)
    pub fn builder() -> crate::input::delete_campaign_input::Builder {
        crate::input::delete_campaign_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteCampaign {
    type Output = std::result::Result<crate::output::DeleteCampaignOutput, crate::error::DeleteCampaignError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::DeleteCampaignError::from_response(response));
        }
        let campaign_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::DeleteCampaignError::unhandled)?;
        Ok(crate::output::DeleteCampaignOutput::builder()
            .set_campaign_response(campaign_response)
            .build())
    }
}

/// Disables the GCM channel for an application and deletes any existing settings for the channel.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteGcmChannel {
    _private: (),
}
impl DeleteGcmChannel {
    /// Creates a new builder-style object to manufacture [`DeleteGcmChannelInput`](crate::input::DeleteGcmChannelInput)
    pub fn builder() -> crate::input::delete_gcm_channel_input::Builder {
        crate::input::delete_gcm_channel_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteGcmChannel {
    type Output = std::result::Result<crate::output::DeleteGcmChannelOutput, crate::error::DeleteGcmChannelError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::DeleteGcmChannelError::from_response(response));
        }
        let gcm_channel_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::DeleteGcmChannelError::unhandled)?;
        Ok(crate::output::DeleteGcmChannelOutput::builder()
            .set_gcm_channel_response(gcm_channel_response)
            .build())
    }
}

/// Deletes a segment from an application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteSegment {
    _private: (),
}
impl DeleteSegment {
    /// Creates a new builder-style object to manufacture [`DeleteSegmentInput`](crate::input::DeleteSegmentInput)
    pub fn builder() -> crate::input::delete_segment_input::Builder {
        crate::input::delete_segment_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteSegment {
    type Output = std::result::Result<crate::output::DeleteSegmentOutput, crate::error::DeleteSegmentError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::DeleteSegmentError::from_response(response));
        }
        let segment_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::DeleteSegmentError::unhandled)?;
        Ok(crate::output::DeleteSegmentOutput::builder()
            .set_segment_response(segment_response)
            .build())
    }
}

/// Retrieves information about the status and settings of the APNs channel for an application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetApnsChannel {
    _private: (),
}
impl GetApnsChannel {
    /// Creates a new builder-style object to manufacture [`GetApnsChannelInput`](crate::input::GetApnsChannelInput)
    pub fn builder() -> crate::input::get_apns_channel_input::Builder {
        crate::input::get_apns_channel_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetApnsChannel {
    type Output = std::result::Result<crate::output::GetApnsChannelOutput, crate::error::GetApnsChannelError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::GetApnsChannelError::from_response(response));
        }
        let apns_channel_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::GetApnsChannelError::unhandled)?;
        Ok(crate::output::GetApnsChannelOutput::builder()
            .set_apns_channel_response(apns_channel_response)
            .build())
    }
}

/// Retrieves information about the settings for an application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetApplicationSettings {
    _private: (),
}
impl GetApplicationSettings {
    /// Creates a new builder-style object to manufacture [`GetApplicationSettingsInput`](crate::input::GetApplicationSettingsInput)
    pub fn builder() -> crate::input::get_application_settings_input::Builder {
        crate::input::get_application_settings_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetApplicationSettings {
    type Output = std::result::Result<crate::output::GetApplicationSettingsOutput, crate::error::GetApplicationSettingsError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::GetApplicationSettingsError::from_response(response));
        }
        let application_settings_resource = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::GetApplicationSettingsError::unhandled)?;
        Ok(crate::output::GetApplicationSettingsOutput::builder()
            .set_application_settings_resource(application_settings_resource)
            .build())
    }
}

/// Retrieves information about the status, configuration, and other settings for a campaign.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetCampaign {
    _private: (),
}
impl GetCampaign {
    /// Creates a new builder-style object to manufacture [`GetCampaignInput`](crate::input::GetCampaignInput)
    pub fn builder() -> crate::input::get_campaign_input::Builder {
        crate::input::get_campaign_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetCampaign {
    type Output = std::result::Result<crate::output::GetCampaignOutput, crate::error::GetCampaignError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::GetCampaignError::from_response(response));
        }
        let campaign_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::GetCampaignError::unhandled)?;
        Ok(crate::output::GetCampaignOutput::builder()
            .set_campaign_response(campaign_response)
            .build())
    }
}

/// Retrieves information about all the activities for a campaign.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetCampaignActivities {
    _private: (),
}
impl GetCampaignActivities {
    /// Creates a new builder-style object to manufacture [`GetCampaignActivitiesInput`](crate::input::GetCampaignActivitiesInput)
    pub fn builder() -> crate::input::get_campaign_activities_input::Builder {
        crate::input::get_campaign_activities_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetCampaignActivities {
    type Output = std::result::Result<crate::output::GetCampaignActivitiesOutput, crate::error::GetCampaignActivitiesError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::GetCampaignActivitiesError::from_response(response));
        }
        let activities_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::GetCampaignActivitiesError::unhandled)?;
        Ok(crate::output::GetCampaignActivitiesOutput::builder()
            .set_activities_response(activities_response)
            .build())
    }
}

/// Retrieves information about the status, configuration, and other settings for a specific version
/// of a campaign.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetCampaignVersion {
    _private: (),
}
impl GetCampaignVersion {
    /// Creates a new builder-style object to manufacture [`GetCampaignVersionInput`](crate::input::GetCampaignVersionInput)
    pub fn builder() -> crate::input::get_campaign_version_input::Builder {
        crate::input::get_campaign_version_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetCampaignVersion {
    type Output = std::result::Result<crate::output::GetCampaignVersionOutput, crate::error::GetCampaignVersionError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::GetCampaignVersionError::from_response(response));
        }
        let campaign_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::GetCampaignVersionError::unhandled)?;
        Ok(crate::output::GetCampaignVersionOutput::builder()
            .set_campaign_response(campaign_response)
            .build())
    }
}

/// Retrieves information about the status, configuration, and other settings for all versions of a
/// campaign.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetCampaignVersions {
    _private: (),
}
impl GetCampaignVersions {
    /// Creates a new builder-style object to manufacture [`GetCampaignVersionsInput`](crate::input::GetCampaignVersionsInput)
    pub fn builder() -> crate::input::get_campaign_versions_input::Builder {
        crate::input::get_campaign_versions_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetCampaignVersions {
    type Output = std::result::Result<crate::output::GetCampaignVersionsOutput, crate::error::GetCampaignVersionsError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::GetCampaignVersionsError::from_response(response));
        }
        let campaigns_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::GetCampaignVersionsError::unhandled)?;
        Ok(crate::output::GetCampaignVersionsOutput::builder()
            .set_campaigns_response(campaigns_response)
            .build())
    }
}

/// Retrieves information about the status, configuration, and other settings for all the campaigns
/// that are associated with an application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetCampaigns {
    _private: (),
}
impl GetCampaigns {
    /// Creates a new builder-style object to manufacture [`GetCampaignsInput`](crate::input::GetCampaignsInput)
    pub fn builder() -> crate::input::get_campaigns_input::Builder {
        crate::input::get_campaigns_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetCampaigns {
    type Output = std::result::Result<crate::output::GetCampaignsOutput, crate::error::GetCampaignsError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::GetCampaignsError::from_response(response));
        }
        let campaigns_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::GetCampaignsError::unhandled)?;
        Ok(crate::output::GetCampaignsOutput::builder()
            .set_campaigns_response(campaigns_response)
            .build())
    }
}

/// Retrieves information about the settings and attributes of a specific endpoint for an
/// application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetEndpoint {
    _private: (),
}
impl GetEndpoint {
    /// Creates a new builder-style object to manufacture [`GetEndpointInput`](crate::input::GetEndpointInput)
    pub fn builder() -> crate::input::get_endpoint_input::Builder {
        crate::input::get_endpoint_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetEndpoint {
    type Output = std::result::Result<crate::output::GetEndpointOutput, crate::error::GetEndpointError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::GetEndpointError::from_response(response));
        }
        let endpoint_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::GetEndpointError::unhandled)?;
        Ok(crate::output::GetEndpointOutput::builder()
            .set_endpoint_response(endpoint_response)
            .build())
    }
}

/// Retrieves information about the status and settings of the GCM channel for an application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetGcmChannel {
    _private: (),
}
impl GetGcmChannel {
    /// Creates a new builder-style object to manufacture [`GetGcmChannelInput`](crate::input::GetGcmChannelInput)
    pub fn builder() -> crate::input::get_gcm_channel_input::Builder {
        crate::input::get_gcm_channel_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetGcmChannel {
    type Output = std::result::Result<crate::output::GetGcmChannelOutput, crate::error::GetGcmChannelError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::GetGcmChannelError::from_response(response));
        }
        let gcm_channel_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::GetGcmChannelError::unhandled)?;
        Ok(crate::output::GetGcmChannelOutput::builder()
            .set_gcm_channel_response(gcm_channel_response)
            .build())
    }
}

/// Retrieves information about the status and settings of a specific import job for an application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetImportJob {
    _private: (),
}
impl GetImportJob {
    /// Creates a new builder-style object to manufacture [`GetImportJobInput`](crate::input::GetImportJobInput)
    pub fn builder() -> crate::input::get_import_job_input::Builder {
        crate::input::get_import_job_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetImportJob {
    type Output = std::result::Result<crate::output::GetImportJobOutput, crate::error::GetImportJobError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::GetImportJobError::from_response(response));
        }
        let import_job_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::GetImportJobError::unhandled)?;
        Ok(crate::output::GetImportJobOutput::builder()
            .set_import_job_response(import_job_response)
            .build())
    }
}

/// Retrieves information about the status and settings of all the import jobs for an application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetImportJobs {
    _private: (),
}
impl GetImportJobs {
    /// Creates a new builder-style object to manufacture [`GetImportJobsInput`](crate::input::GetImportJobsInput)
    pub fn builder() -> crate::input::get_import_jobs_input::Builder {
        crate::input::get_import_jobs_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetImportJobs {
    type Output = std::result::Result<crate::output::GetImportJobsOutput, crate::error::GetImportJobsError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::GetImportJobsError::from_response(response));
        }
        let import_jobs_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::GetImportJobsError::unhandled)?;
        Ok(crate::output::GetImportJobsOutput::builder()
            .set_import_jobs_response(import_jobs_response)
            .build())
    }
}

/// Retrieves information about the configuration, dimension, and other settings for a specific
/// segment that's associated with an application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetSegment {
    _private: (),
}
impl GetSegment {
    /// Creates a new builder-style object to manufacture [`GetSegmentInput`](crate::input::GetSegmentInput)
    pub fn builder() -> crate::input::get_segment_input::Builder {
        crate::input::get_segment_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetSegment {
    type Output = std::result::Result<crate::output::GetSegmentOutput, crate::error::GetSegmentError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::GetSegmentError::from_response(response));
        }
        let segment_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::GetSegmentError::unhandled)?;
        Ok(crate::output::GetSegmentOutput::builder()
            .set_segment_response(segment_response)
            .build())
    }
}

/// Retrieves information about the status and settings of the import jobs for a segment.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetSegmentImportJobs {
    _private: (),
}
impl GetSegmentImportJobs {
    /// Creates a new builder-style object to manufacture [`GetSegmentImportJobsInput`](crate::input::GetSegmentImportJobsInput)
    pub fn builder() -> crate::input::get_segment_import_jobs_input::Builder {
        crate::input::get_segment_import_jobs_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetSegmentImportJobs {
    type Output = std::result::Result<crate::output::GetSegmentImportJobsOutput, crate::error::GetSegmentImportJobsError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::GetSegmentImportJobsError::from_response(response));
        }
        let import_jobs_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::GetSegmentImportJobsError::unhandled)?;
        Ok(crate::output::GetSegmentImportJobsOutput::builder()
            .set_import_jobs_response(import_jobs_response)
            .build())
    }
}

/// Retrieves information about the configuration, dimension, and other settings for a specific
/// version of a segment that's associated with an application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetSegmentVersion {
    _private: (),
}
impl GetSegmentVersion {
    /// Creates a new builder-style object to manufacture [`GetSegmentVersionInput`](crate::input::GetSegmentVersionInput)
    pub fn builder() -> crate::input::get_segment_version_input::Builder {
        crate::input::get_segment_version_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetSegmentVersion {
    type Output = std::result::Result<crate::output::GetSegmentVersionOutput, crate::error::GetSegmentVersionError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::GetSegmentVersionError::from_response(response));
        }
        let segment_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::GetSegmentVersionError::unhandled)?;
        Ok(crate::output::GetSegmentVersionOutput::builder()
            .set_segment_response(segment_response)
            .build())
    }
}

/// Retrieves information about the configuration, dimension, and other settings for all the
/// versions of a specific segment that's associated with an application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetSegmentVersions {
    _private: (),
}
impl GetSegmentVersions {
    /// Creates a new builder-style object to manufacture [`GetSegmentVersionsInput`](crate::input::GetSegmentVersionsInput)
    pub fn builder() -> crate::input::get_segment_versions_input::Builder {
        crate::input::get_segment_versions_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetSegmentVersions {
    type Output = std::result::Result<crate::output::GetSegmentVersionsOutput, crate::error::GetSegmentVersionsError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::GetSegmentVersionsError::from_response(response));
        }
        let segments_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::GetSegmentVersionsError::unhandled)?;
        Ok(crate::output::GetSegmentVersionsOutput::builder()
            .set_segments_response(segments_response)
            .build())
    }
}

/// Retrieves information about the configuration, dimension, and other settings for all the
/// segments that are associated with an application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetSegments {
    _private: (),
}
impl GetSegments {
    /// Creates a new builder-style object to manufacture [`GetSegmentsInput`](crate::input::GetSegmentsInput)
    pub fn builder() -> crate::input::get_segments_input::Builder {
        crate::input::get_segments_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetSegments {
    type Output = std::result::Result<crate::output::GetSegmentsOutput, crate::error::GetSegmentsError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::GetSegmentsError::from_response(response));
        }
        let segments_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::GetSegmentsError::unhandled)?;
        Ok(crate::output::GetSegmentsOutput::builder()
            .set_segments_response(segments_response)
            .build())
    }
}

/// Enables the APNs channel for an application or updates the status and settings of the APNs
/// channel for an application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UpdateApnsChannel {
    _private: (),
}
impl UpdateApnsChannel {
    /// Creates a new builder-style object to manufacture [`UpdateApnsChannelInput`](crate::input::UpdateApnsChannelInput)
    pub fn builder() -> crate::input::update_apns_channel_input::Builder {
        crate::input::update_apns_channel_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UpdateApnsChannel {
    type Output = std::result::Result<crate::output::UpdateApnsChannelOutput, crate::error::UpdateApnsChannelError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::UpdateApnsChannelError::from_response(response));
        }
        let apns_channel_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::UpdateApnsChannelError::unhandled)?;
        Ok(crate::output::UpdateApnsChannelOutput::builder()
            .set_apns_channel_response(apns_channel_response)
            .build())
    }
}

/// Updates the settings for an application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UpdateApplicationSettings {
    _private: (),
}
impl UpdateApplicationSettings {
    /// Creates a new builder-style object to manufacture [`UpdateApplicationSettingsInput`](crate::input::UpdateApplicationSettingsInput)
    pub fn builder() -> crate::input::update_application_settings_input::Builder {
        crate::input::update_application_settings_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UpdateApplicationSettings {
    type Output = std::result::Result<crate::output::UpdateApplicationSettingsOutput, crate::error::UpdateApplicationSettingsError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::UpdateApplicationSettingsError::from_response(response));
        }
        let application_settings_resource = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::UpdateApplicationSettingsError::unhandled)?;
        Ok(crate::output::UpdateApplicationSettingsOutput::builder()
            .set_application_settings_resource(application_settings_resource)
            .build())
    }
}

/// Updates the configuration and other settings for a campaign.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UpdateCampaign {
    _private: (),
}
impl UpdateCampaign {
    /// Creates a new builder-style object to manufacture [`UpdateCampaignInput`](crate::input::UpdateCampaignInput)
    pub fn builder() -> crate::input::update_campaign_input::Builder {
        crate::input::update_campaign_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UpdateCampaign {
    type Output = std::result::Result<crate::output::UpdateCampaignOutput, crate::error::UpdateCampaignError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::UpdateCampaignError::from_response(response));
        }
        let campaign_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::UpdateCampaignError::unhandled)?;
        Ok(crate::output::UpdateCampaignOutput::builder()
            .set_campaign_response(campaign_response)
            .build())
    }
}

/// Creates a new endpoint for an application or updates the settings and attributes of an existing
/// endpoint for an application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UpdateEndpoint {
    _private: (),
}
impl UpdateEndpoint {
    /// Creates a new builder-style object to manufacture [`UpdateEndpointInput`](crate::input::UpdateEndpointInput)
    pub fn builder() -> crate::input::update_endpoint_input::Builder {
        crate::input::update_endpoint_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UpdateEndpoint {
    type Output = std::result::Result<crate::output::UpdateEndpointOutput, crate::error::UpdateEndpointError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::UpdateEndpointError::from_response(response));
        }
        let message_body = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::UpdateEndpointError::unhandled)?;
        Ok(crate::output::UpdateEndpointOutput::builder()
            .set_message_body(message_body)
            .build())
    }
}

/// Creates a new batch of endpoints for an application or updates the settings and attributes of a
/// batch of existing endpoints for an application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UpdateEndpointsBatch {
    _private: (),
}
impl UpdateEndpointsBatch {
    /// Creates a new builder-style object to manufacture [`UpdateEndpointsBatchInput`](crate::input::UpdateEndpointsBatchInput)
    pub fn builder() -> crate::input::update_endpoints_batch_input::Builder {
        crate::input::update_endpoints_batch_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UpdateEndpointsBatch {
    type Output = std::result::Result<crate::output::UpdateEndpointsBatchOutput, crate::error::UpdateEndpointsBatchError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::UpdateEndpointsBatchError::from_response(response));
        }
        let message_body = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::UpdateEndpointsBatchError::unhandled)?;
        Ok(crate::output::UpdateEndpointsBatchOutput::builder()
            .set_message_body(message_body)
            .build())
    }
}

/// Enables the GCM channel for an application or updates the status and settings of the GCM channel
/// for an application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UpdateGcmChannel {
    _private: (),
}
impl UpdateGcmChannel {
    /// Creates a new builder-style object to manufacture [`UpdateGcmChannelInput`](crate::input::UpdateGcmChannelInput)
    pub fn builder() -> crate::input::update_gcm_channel_input::Builder {
        crate::input::update_gcm_channel_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UpdateGcmChannel {
    type Output = std::result::Result<crate::output::UpdateGcmChannelOutput, crate::error::UpdateGcmChannelError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::UpdateGcmChannelError::from_response(response));
        }
        let gcm_channel_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::UpdateGcmChannelError::unhandled)?;
        Ok(crate::output::UpdateGcmChannelOutput::builder()
            .set_gcm_channel_response(gcm_channel_response)
            .build())
    }
}

/// Creates a new segment for an application or updates the configuration, dimension, and other
/// settings for an existing segment that's associated with an application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UpdateSegment {
    _private: (),
}
impl UpdateSegment {
    /// Creates a new builder-style object to manufacture [`UpdateSegmentInput`](crate::input::UpdateSegmentInput)
    pub fn builder() -> crate::input::update_segment_input::Builder {
        crate::input::update_segment_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UpdateSegment {
    type Output = std::result::Result<crate::output::UpdateSegmentOutput, crate::error::UpdateSegmentError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::UpdateSegmentError::from_response(response));
        }
        let segment_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::UpdateSegmentError::unhandled)?;
        Ok(crate::output::UpdateSegmentOutput::builder()
            .set_segment_response(segment_response)
            .build())
    }
}

/// Creates and sends a direct message.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct SendMessages {
    _private: (),
}
impl SendMessages {
    /// Creates a new builder-style object to manufacture [`SendMessagesInput`](crate::input::SendMessagesInput)
    pub fn builder() -> crate::input::send_messages_input::Builder {
        crate::input::send_messages_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for SendMessages {
    type Output = std::result::Result<crate::output::SendMessagesOutput, crate::error::SendMessagesError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::SendMessagesError::from_response(response));
        }
        let message_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::SendMessagesError::unhandled)?;
        Ok(crate::output::SendMessagesOutput::builder()
            .set_message_response(message_response)
            .build())
    }
}

/// Creates a journey for an application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateJourney {
    _private: (),
}
impl CreateJourney {
    /// Creates a new builder-style object to manufacture [`CreateJourneyInput`](crate::input::CreateJourneyInput)
    pub fn builder() -> crate::input::create_journey_input::Builder {
        crate::input::create_journey_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateJourney {
    type Output = std::result::Result<crate::output::CreateJourneyOutput, crate::error::CreateJourneyError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::CreateJourneyError::from_response(response));
        }
        let journey_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::CreateJourneyError::unhandled)?;
        Ok(crate::output::CreateJourneyOutput::builder()
            .set_journey_response(journey_response)
            .build())
    }
}

/// Retrieves information about the status, configuration, and other settings for a journey.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetJourney {
    _private: (),
}
impl GetJourney {
    /// Creates a new builder-style object to manufacture [`GetJourneyInput`](crate::input::GetJourneyInput)
    pub fn builder() -> crate::input::get_journey_input::Builder {
        crate::input::get_journey_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetJourney {
    type Output = std::result::Result<crate::output::GetJourneyOutput, crate::error::GetJourneyError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::GetJourneyError::from_response(response));
        }
        let journey_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::GetJourneyError::unhandled)?;
        Ok(crate::output::GetJourneyOutput::builder()
            .set_journey_response(journey_response)
            .build())
    }
}

/// Updates the configuration and other settings for a journey.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UpdateJourney {
    _private: (),
}
impl UpdateJourney {
    /// Creates a new builder-style object to manufacture [`UpdateJourneyInput`](crate::input::UpdateJourneyInput)
    pub fn builder() -> crate::input::update_journey_input::Builder {
        crate::input::update_journey_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UpdateJourney {
    type Output = std::result::Result<crate::output::UpdateJourneyOutput, crate::error::UpdateJourneyError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::UpdateJourneyError::from_response(response));
        }
        let journey_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::UpdateJourneyError::unhandled)?;
        Ok(crate::output::UpdateJourneyOutput::builder()
            .set_journey_response(journey_response)
            .build())
    }
}

/// Deletes a journey from an application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteJourney {
    _private: (),
}
impl DeleteJourney {
    /// Creates a new builder-style object to manufacture [`DeleteJourneyInput`](crate::input::DeleteJourneyInput)
    pub fn builder() -> crate::input::delete_journey_input::Builder {
        crate::input::delete_journey_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteJourney {
    type Output = std::result::Result<crate::output::DeleteJourneyOutput, crate::error::DeleteJourneyError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::DeleteJourneyError::from_response(response));
        }
        let journey_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::DeleteJourneyError::unhandled)?;
        Ok(crate::output::DeleteJourneyOutput::builder()
            .set_journey_response(journey_response)
            .build())
    }
}

/// Retrieves information about the status, configuration, and other settings for all the journeys
/// that are associated with an application.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListJourneys {
    _private: (),
}
impl ListJourneys {
    /// Creates a new builder-style object to manufacture [`ListJourneysInput`](crate::input::ListJourneysInput)
    pub fn builder() -> crate::input::list_journeys_input::Builder {
        crate::input::list_journeys_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListJourneys {
    type Output = std::result::Result<crate::output::ListJourneysOutput, crate::error::ListJourneysError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::ListJourneysError::from_response(response));
        }
        let journeys_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::ListJourneysError::unhandled)?;
        Ok(crate::output::ListJourneysOutput::builder()
            .set_journeys_response(journeys_response)
            .build())
    }
}

/// Retrieves (queries) pre-aggregated data for a standard execution metric that applies to a
/// journey.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetJourneyExecutionMetrics {
    _private: (),
}
impl GetJourneyExecutionMetrics {
    /// Creates a new builder-style object to manufacture [`GetJourneyExecutionMetricsInput`](crate::input::GetJourneyExecutionMetricsInput)
    pub fn builder() -> crate::input::get_journey_execution_metrics_input::Builder {
        crate::input::get_journey_execution_metrics_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetJourneyExecutionMetrics {
    type Output = std::result::Result<crate::output::GetJourneyExecutionMetricsOutput, crate::error::GetJourneyExecutionMetricsError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::GetJourneyExecutionMetricsError::from_response(response));
        }
        let journey_execution_metrics_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::GetJourneyExecutionMetricsError::unhandled)?;
        Ok(crate::output::GetJourneyExecutionMetricsOutput::builder()
            .set_journey_execution_metrics_response(journey_execution_metrics_response)
            .build())
    }
}

/// Creates a message template for messages that are sent through the email channel.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateEmailTemplate {
    _private: (),
}
impl CreateEmailTemplate {
    /// Creates a new builder-style object to manufacture [`CreateEmailTemplateInput`](crate::input::CreateEmailTemplateInput)
    pub fn builder() -> crate::input::create_email_template_input::Builder {
        crate::input::create_email_template_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateEmailTemplate {
    type Output = std::result::Result<crate::output::CreateEmailTemplateOutput, crate::error::CreateEmailTemplateError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::CreateEmailTemplateError::from_response(response));
        }
        let create_template_message_body = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::CreateEmailTemplateError::unhandled)?;
        Ok(crate::output::CreateEmailTemplateOutput::builder()
            .set_create_template_message_body(create_template_message_body)
            .build())
    }
}

/// Retrieves the content and settings of a message template for messages that are sent through the
/// email channel.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetEmailTemplate {
    _private: (),
}
impl GetEmailTemplate {
    /// Creates a new builder-style object to manufacture [`GetEmailTemplateInput`](crate::input::GetEmailTemplateInput)
    pub fn builder() -> crate::input::get_email_template_input::Builder {
        crate::input::get_email_template_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetEmailTemplate {
    type Output = std::result::Result<crate::output::GetEmailTemplateOutput, crate::error::GetEmailTemplateError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::GetEmailTemplateError::from_response(response));
        }
        let email_template_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::GetEmailTemplateError::unhandled)?;
        Ok(crate::output::GetEmailTemplateOutput::builder()
            .set_email_template_response(email_template_response)
            .build())
    }
}

/// Retrieves information about all the message templates that are associated with your Amazon
/// Pinpoint account.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListTemplates {
    _private: (),
}
impl ListTemplates {
    /// Creates a new builder-style object to manufacture [`ListTemplatesInput`](crate::input::ListTemplatesInput)
    pub fn builder() -> crate::input::list_templates_input::Builder {
        crate::input::list_templates_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListTemplates {
    type Output = std::result::Result<crate::output::ListTemplatesOutput, crate::error::ListTemplatesError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(crate::error::ListTemplatesError::from_response(response));
        }
        let templates_response = crate::json_deser::deser_payload(response.body())
            .map_err(crate::error::ListTemplatesError::unhandled)?;
        Ok(crate::output::ListTemplatesOutput::builder()
            .set_templates_response(templates_response)
            .build())
    }
}
