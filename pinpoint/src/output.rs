/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct CreateCampaignOutput {
    pub campaign_response: std::option::Option<crate::model::CampaignResponse>,
}
impl CreateCampaignOutput {
    pub fn campaign_response(&self) -> std::option::Option<&crate::model::CampaignResponse> {
        self.campaign_response.as_ref()
    }
}
/// See [`CreateCampaignOutput`](crate::output::CreateCampaignOutput)
pub mod create_campaign_output {
    /// A builder for [`CreateCampaignOutput`](crate::output::CreateCampaignOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaign_response: std::option::Option<crate::model::CampaignResponse>,
    }
    impl Builder {
        pub fn campaign_response(mut self, input: crate::model::CampaignResponse) -> Self {
            self.campaign_response = Some(input);
            self
        }
        pub fn set_campaign_response(mut self, input: std::option::Option<crate::model::CampaignResponse>) -> Self {
            self.campaign_response = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateCampaignOutput`](crate::output::CreateCampaignOutput)
        pub fn build(self) -> crate::output::CreateCampaignOutput {
            crate::output::CreateCampaignOutput {
                campaign_response: self.campaign_response,
            }
        }
    }
}
impl CreateCampaignOutput {
    /// Creates a new builder-style object to manufacture [`CreateCampaignOutput`](crate::output::CreateCampaignOutput)
    pub fn builder() -> crate::output::create_campaign_output::Builder {
        crate::output::create_campaign_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct CreateImportJobOutput {
    pub import_job_response: std::option::Option<crate::model::ImportJobResponse>,
}
impl CreateImportJobOutput {
    pub fn import_job_response(&self) -> std::option::Option<&crate::model::ImportJobResponse> {
        self.import_job_response.as_ref()
    }
}
/// See [`CreateImportJobOutput`](crate::output::CreateImportJobOutput)
pub mod create_import_job_output {
    /// A builder for [`CreateImportJobOutput`](crate::output::CreateImportJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) import_job_response: std::option::Option<crate::model::ImportJobResponse>,
    }
    impl Builder {
        pub fn import_job_response(mut self, input: crate::model::ImportJobResponse) -> Self {
            self.import_job_response = Some(input);
            self
        }
        pub fn set_import_job_response(mut self, input: std::option::Option<crate::model::ImportJobResponse>) -> Self {
            self.import_job_response = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateImportJobOutput`](crate::output::CreateImportJobOutput)
        pub fn build(self) -> crate::output::CreateImportJobOutput {
            crate::output::CreateImportJobOutput {
                import_job_response: self.import_job_response,
            }
        }
    }
}
impl CreateImportJobOutput {
    /// Creates a new builder-style object to manufacture [`CreateImportJobOutput`](crate::output::CreateImportJobOutput)
    pub fn builder() -> crate::output::create_import_job_output::Builder {
        crate::output::create_import_job_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct CreateSegmentOutput {
    pub segment_response: std::option::Option<crate::model::SegmentResponse>,
}
impl CreateSegmentOutput {
    pub fn segment_response(&self) -> std::option::Option<&crate::model::SegmentResponse> {
        self.segment_response.as_ref()
    }
}
/// See [`CreateSegmentOutput`](crate::output::CreateSegmentOutput)
pub mod create_segment_output {
    /// A builder for [`CreateSegmentOutput`](crate::output::CreateSegmentOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segment_response: std::option::Option<crate::model::SegmentResponse>,
    }
    impl Builder {
        pub fn segment_response(mut self, input: crate::model::SegmentResponse) -> Self {
            self.segment_response = Some(input);
            self
        }
        pub fn set_segment_response(mut self, input: std::option::Option<crate::model::SegmentResponse>) -> Self {
            self.segment_response = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateSegmentOutput`](crate::output::CreateSegmentOutput)
        pub fn build(self) -> crate::output::CreateSegmentOutput {
            crate::output::CreateSegmentOutput {
                segment_response: self.segment_response,
            }
        }
    }
}
impl CreateSegmentOutput {
    /// Creates a new builder-style object to manufacture [`CreateSegmentOutput`](crate::output::CreateSegmentOutput)
    pub fn builder() -> crate::output::create_segment_output::Builder {
        crate::output::create_segment_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct DeleteApnsChannelOutput {
    pub apns_channel_response: std::option::Option<crate::model::ApnsChannelResponse>,
}
impl DeleteApnsChannelOutput {
    pub fn apns_channel_response(&self) -> std::option::Option<&crate::model::ApnsChannelResponse> {
        self.apns_channel_response.as_ref()
    }
}
/// See [`DeleteApnsChannelOutput`](crate::output::DeleteApnsChannelOutput)
pub mod delete_apns_channel_output {
    /// A builder for [`DeleteApnsChannelOutput`](crate::output::DeleteApnsChannelOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) apns_channel_response: std::option::Option<crate::model::ApnsChannelResponse>,
    }
    impl Builder {
        pub fn apns_channel_response(mut self, input: crate::model::ApnsChannelResponse) -> Self {
            self.apns_channel_response = Some(input);
            self
        }
        pub fn set_apns_channel_response(mut self, input: std::option::Option<crate::model::ApnsChannelResponse>) -> Self {
            self.apns_channel_response = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteApnsChannelOutput`](crate::output::DeleteApnsChannelOutput)
        pub fn build(self) -> crate::output::DeleteApnsChannelOutput {
            crate::output::DeleteApnsChannelOutput {
                apns_channel_response: self.apns_channel_response,
            }
        }
    }
}
impl DeleteApnsChannelOutput {
    /// Creates a new builder-style object to manufacture [`DeleteApnsChannelOutput`](crate::output::DeleteApnsChannelOutput)
    pub fn builder() -> crate::output::delete_apns_channel_output::Builder {
        crate::output::delete_apns_channel_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct DeleteCampaignOutput {
    pub campaign_response: std::option::Option<crate::model::CampaignResponse>,
}
impl DeleteCampaignOutput {
    pub fn campaign_response(&self) -> std::option::Option<&crate::model::CampaignResponse> {
        self.campaign_response.as_ref()
    }
}
/// See [`DeleteCampaignOutput`](crate::output::DeleteCampaignOutput)
pub mod delete_campaign_output {
    /// A builder for [`DeleteCampaignOutput`](crate::output::DeleteCampaignOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaign_response: std::option::Option<crate::model::CampaignResponse>,
    }
    impl Builder {
        pub fn campaign_response(mut self, input: crate::model::CampaignResponse) -> Self {
            self.campaign_response = Some(input);
            self
        }
        pub fn set_campaign_response(mut self, input: std::option::Option<crate::model::CampaignResponse>) -> Self {
            self.campaign_response = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteCampaignOutput`](crate::output::DeleteCampaignOutput)
        pub fn build(self) -> crate::output::DeleteCampaignOutput {
            crate::output::DeleteCampaignOutput {
                campaign_response: self.campaign_response,
            }
        }
    }
}
impl DeleteCampaignOutput {
    /// Creates a new builder-style object to manufacture [`DeleteCampaignOutput`](crate::output::DeleteCampaignOutput)
    pub fn builder() -> crate::output::delete_campaign_output::Builder {
        crate::output::delete_campaign_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct DeleteGcmChannelOutput {
    pub gcm_channel_response: std::option::Option<crate::model::GcmChannelResponse>,
}
impl DeleteGcmChannelOutput {
    pub fn gcm_channel_response(&self) -> std::option::Option<&crate::model::GcmChannelResponse> {
        self.gcm_channel_response.as_ref()
    }
}
/// See [`DeleteGcmChannelOutput`](crate::output::DeleteGcmChannelOutput)
pub mod delete_gcm_channel_output {
    /// A builder for [`DeleteGcmChannelOutput`](crate::output::DeleteGcmChannelOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) gcm_channel_response: std::option::Option<crate::model::GcmChannelResponse>,
    }
    impl Builder {
        pub fn gcm_channel_response(mut self, input: crate::model::GcmChannelResponse) -> Self {
            self.gcm_channel_response = Some(input);
            self
        }
        pub fn set_gcm_channel_response(mut self, input: std::option::Option<crate::model::GcmChannelResponse>) -> Self {
            self.gcm_channel_response = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteGcmChannelOutput`](crate::output::DeleteGcmChannelOutput)
        pub fn build(self) -> crate::output::DeleteGcmChannelOutput {
            crate::output::DeleteGcmChannelOutput {
                gcm_channel_response: self.gcm_channel_response,
            }
        }
    }
}
impl DeleteGcmChannelOutput {
    /// Creates a new builder-style object to manufacture [`DeleteGcmChannelOutput`](crate::output::DeleteGcmChannelOutput)
    pub fn builder() -> crate::output::delete_gcm_channel_output::Builder {
        crate::output::delete_gcm_channel_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct DeleteSegmentOutput {
    pub segment_response: std::option::Option<crate::model::SegmentResponse>,
}
impl DeleteSegmentOutput {
    pub fn segment_response(&self) -> std::option::Option<&crate::model::SegmentResponse> {
        self.segment_response.as_ref()
    }
}
/// See [`DeleteSegmentOutput`](crate::output::DeleteSegmentOutput)
pub mod delete_segment_output {
    /// A builder for [`DeleteSegmentOutput`](crate::output::DeleteSegmentOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segment_response: std::option::Option<crate::model::SegmentResponse>,
    }
    impl Builder {
        pub fn segment_response(mut self, input: crate::model::SegmentResponse) -> Self {
            self.segment_response = Some(input);
            self
        }
        pub fn set_segment_response(mut self, input: std::option::Option<crate::model::SegmentResponse>) -> Self {
            self.segment_response = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteSegmentOutput`](crate::output::DeleteSegmentOutput)
        pub fn build(self) -> crate::output::DeleteSegmentOutput {
            crate::output::DeleteSegmentOutput {
                segment_response: self.segment_response,
            }
        }
    }
}
impl DeleteSegmentOutput {
    /// Creates a new builder-style object to manufacture [`DeleteSegmentOutput`](crate::output::DeleteSegmentOutput)
    pub fn builder() -> crate::output::delete_segment_output::Builder {
        crate::output::delete_segment_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetApnsChannelOutput {
    pub apns_channel_response: std::option::Option<crate::model::ApnsChannelResponse>,
}
impl GetApnsChannelOutput {
    pub fn apns_channel_response(&self) -> std::option::Option<&crate::model::ApnsChannelResponse> {
        self.apns_channel_response.as_ref()
    }
}
/// See [`GetApnsChannelOutput`](crate::output::GetApnsChannelOutput)
pub mod get_apns_channel_output {
    /// A builder for [`GetApnsChannelOutput`](crate::output::GetApnsChannelOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) apns_channel_response: std::option::Option<crate::model::ApnsChannelResponse>,
    }
    impl Builder {
        pub fn apns_channel_response(mut self, input: crate::model::ApnsChannelResponse) -> Self {
            self.apns_channel_response = Some(input);
            self
        }
        pub fn set_apns_channel_response(mut self, input: std::option::Option<crate::model::ApnsChannelResponse>) -> Self {
            self.apns_channel_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetApnsChannelOutput`](crate::output::GetApnsChannelOutput)
        pub fn build(self) -> crate::output::GetApnsChannelOutput {
            crate::output::GetApnsChannelOutput {
                apns_channel_response: self.apns_channel_response,
            }
        }
    }
}
impl GetApnsChannelOutput {
    /// Creates a new builder-style object to manufacture [`GetApnsChannelOutput`](crate::output::GetApnsChannelOutput)
    pub fn builder() -> crate::output::get_apns_channel_output::Builder {
        crate::output::get_apns_channel_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetApplicationSettingsOutput {
    pub application_settings_resource: std::option::Option<crate::model::ApplicationSettingsResource>,
}
impl GetApplicationSettingsOutput {
    pub fn application_settings_resource(&self) -> std::option::Option<&crate::model::ApplicationSettingsResource> {
        self.application_settings_resource.as_ref()
    }
}
/// See [`GetApplicationSettingsOutput`](crate::output::GetApplicationSettingsOutput)
pub mod get_application_settings_output {
    /// A builder for [`GetApplicationSettingsOutput`](crate::output::GetApplicationSettingsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_settings_resource: std::option::Option<crate::model::ApplicationSettingsResource>,
    }
    impl Builder {
        pub fn application_settings_resource(mut self, input: crate::model::ApplicationSettingsResource) -> Self {
            self.application_settings_resource = Some(input);
            self
        }
        pub fn set_application_settings_resource(mut self, input: std::option::Option<crate::model::ApplicationSettingsResource>) -> Self {
            self.application_settings_resource = input;
            self
        }
        /// Consumes the builder and constructs a [`GetApplicationSettingsOutput`](crate::output::GetApplicationSettingsOutput)
        pub fn build(self) -> crate::output::GetApplicationSettingsOutput {
            crate::output::GetApplicationSettingsOutput {
                application_settings_resource: self.application_settings_resource,
            }
        }
    }
}
impl GetApplicationSettingsOutput {
    /// Creates a new builder-style object to manufacture [`GetApplicationSettingsOutput`](crate::output::GetApplicationSettingsOutput)
    pub fn builder() -> crate::output::get_application_settings_output::Builder {
        crate::output::get_application_settings_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetCampaignOutput {
    pub campaign_response: std::option::Option<crate::model::CampaignResponse>,
}
impl GetCampaignOutput {
    pub fn campaign_response(&self) -> std::option::Option<&crate::model::CampaignResponse> {
        self.campaign_response.as_ref()
    }
}
/// See [`GetCampaignOutput`](crate::output::GetCampaignOutput)
pub mod get_campaign_output {
    /// A builder for [`GetCampaignOutput`](crate::output::GetCampaignOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaign_response: std::option::Option<crate::model::CampaignResponse>,
    }
    impl Builder {
        pub fn campaign_response(mut self, input: crate::model::CampaignResponse) -> Self {
            self.campaign_response = Some(input);
            self
        }
        pub fn set_campaign_response(mut self, input: std::option::Option<crate::model::CampaignResponse>) -> Self {
            self.campaign_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCampaignOutput`](crate::output::GetCampaignOutput)
        pub fn build(self) -> crate::output::GetCampaignOutput {
            crate::output::GetCampaignOutput {
                campaign_response: self.campaign_response,
            }
        }
    }
}
impl GetCampaignOutput {
    /// Creates a new builder-style object to manufacture [`GetCampaignOutput`](crate::output::GetCampaignOutput)
    pub fn builder() -> crate::output::get_campaign_output::Builder {
        crate::output::get_campaign_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetCampaignActivitiesOutput {
    pub activities_response: std::option::Option<crate::model::ActivitiesResponse>,
}
impl GetCampaignActivitiesOutput {
    pub fn activities_response(&self) -> std::option::Option<&crate::model::ActivitiesResponse> {
        self.activities_response.as_ref()
    }
}
/// See [`GetCampaignActivitiesOutput`](crate::output::GetCampaignActivitiesOutput)
pub mod get_campaign_activities_output {
    /// A builder for [`GetCampaignActivitiesOutput`](crate::output::GetCampaignActivitiesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) activities_response: std::option::Option<crate::model::ActivitiesResponse>,
    }
    impl Builder {
        pub fn activities_response(mut self, input: crate::model::ActivitiesResponse) -> Self {
            self.activities_response = Some(input);
            self
        }
        pub fn set_activities_response(mut self, input: std::option::Option<crate::model::ActivitiesResponse>) -> Self {
            self.activities_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCampaignActivitiesOutput`](crate::output::GetCampaignActivitiesOutput)
        pub fn build(self) -> crate::output::GetCampaignActivitiesOutput {
            crate::output::GetCampaignActivitiesOutput {
                activities_response: self.activities_response,
            }
        }
    }
}
impl GetCampaignActivitiesOutput {
    /// Creates a new builder-style object to manufacture [`GetCampaignActivitiesOutput`](crate::output::GetCampaignActivitiesOutput)
    pub fn builder() -> crate::output::get_campaign_activities_output::Builder {
        crate::output::get_campaign_activities_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetCampaignVersionOutput {
    pub campaign_response: std::option::Option<crate::model::CampaignResponse>,
}
impl GetCampaignVersionOutput {
    pub fn campaign_response(&self) -> std::option::Option<&crate::model::CampaignResponse> {
        self.campaign_response.as_ref()
    }
}
/// See [`GetCampaignVersionOutput`](crate::output::GetCampaignVersionOutput)
pub mod get_campaign_version_output {
    /// A builder for [`GetCampaignVersionOutput`](crate::output::GetCampaignVersionOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaign_response: std::option::Option<crate::model::CampaignResponse>,
    }
    impl Builder {
        pub fn campaign_response(mut self, input: crate::model::CampaignResponse) -> Self {
            self.campaign_response = Some(input);
            self
        }
        pub fn set_campaign_response(mut self, input: std::option::Option<crate::model::CampaignResponse>) -> Self {
            self.campaign_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCampaignVersionOutput`](crate::output::GetCampaignVersionOutput)
        pub fn build(self) -> crate::output::GetCampaignVersionOutput {
            crate::output::GetCampaignVersionOutput {
                campaign_response: self.campaign_response,
            }
        }
    }
}
impl GetCampaignVersionOutput {
    /// Creates a new builder-style object to manufacture [`GetCampaignVersionOutput`](crate::output::GetCampaignVersionOutput)
    pub fn builder() -> crate::output::get_campaign_version_output::Builder {
        crate::output::get_campaign_version_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetCampaignVersionsOutput {
    pub campaigns_response: std::option::Option<crate::model::CampaignsResponse>,
}
impl GetCampaignVersionsOutput {
    pub fn campaigns_response(&self) -> std::option::Option<&crate::model::CampaignsResponse> {
        self.campaigns_response.as_ref()
    }
}
/// See [`GetCampaignVersionsOutput`](crate::output::GetCampaignVersionsOutput)
pub mod get_campaign_versions_output {
    /// A builder for [`GetCampaignVersionsOutput`](crate::output::GetCampaignVersionsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaigns_response: std::option::Option<crate::model::CampaignsResponse>,
    }
    impl Builder {
        pub fn campaigns_response(mut self, input: crate::model::CampaignsResponse) -> Self {
            self.campaigns_response = Some(input);
            self
        }
        pub fn set_campaigns_response(mut self, input: std::option::Option<crate::model::CampaignsResponse>) -> Self {
            self.campaigns_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCampaignVersionsOutput`](crate::output::GetCampaignVersionsOutput)
        pub fn build(self) -> crate::output::GetCampaignVersionsOutput {
            crate::output::GetCampaignVersionsOutput {
                campaigns_response: self.campaigns_response,
            }
        }
    }
}
impl GetCampaignVersionsOutput {
    /// Creates a new builder-style object to manufacture [`GetCampaignVersionsOutput`](crate::output::GetCampaignVersionsOutput)
    pub fn builder() -> crate::output::get_campaign_versions_output::Builder {
        crate::output::get_campaign_versions_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetCampaignsOutput {
    pub campaigns_response: std::option::Option<crate::model::CampaignsResponse>,
}
impl GetCampaignsOutput {
    pub fn campaigns_response(&self) -> std::option::Option<&crate::model::CampaignsResponse> {
        self.campaigns_response.as_ref()
    }
}
/// See [`GetCampaignsOutput`](crate::output::GetCampaignsOutput)
pub mod get_campaigns_output {
    /// A builder for [`GetCampaignsOutput`](crate::output::GetCampaignsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaigns_response: std::option::Option<crate::model::CampaignsResponse>,
    }
    impl Builder {
        pub fn campaigns_response(mut self, input: crate::model::CampaignsResponse) -> Self {
            self.campaigns_response = Some(input);
            self
        }
        pub fn set_campaigns_response(mut self, input: std::option::Option<crate::model::CampaignsResponse>) -> Self {
            self.campaigns_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCampaignsOutput`](crate::output::GetCampaignsOutput)
        pub fn build(self) -> crate::output::GetCampaignsOutput {
            crate::output::GetCampaignsOutput {
                campaigns_response: self.campaigns_response,
            }
        }
    }
}
impl GetCampaignsOutput {
    /// Creates a new builder-style object to manufacture [`GetCampaignsOutput`](crate::output::GetCampaignsOutput)
    pub fn builder() -> crate::output::get_campaigns_output::Builder {
        crate::output::get_campaigns_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetEndpointOutput {
    pub endpoint_response: std::option::Option<crate::model::EndpointResponse>,
}
impl GetEndpointOutput {
    pub fn endpoint_response(&self) -> std::option::Option<&crate::model::EndpointResponse> {
        self.endpoint_response.as_ref()
    }
}
/// See [`GetEndpointOutput`](crate::output::GetEndpointOutput)
pub mod get_endpoint_output {
    /// A builder for [`GetEndpointOutput`](crate::output::GetEndpointOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) endpoint_response: std::option::Option<crate::model::EndpointResponse>,
    }
    impl Builder {
        pub fn endpoint_response(mut self, input: crate::model::EndpointResponse) -> Self {
            self.endpoint_response = Some(input);
            self
        }
        pub fn set_endpoint_response(mut self, input: std::option::Option<crate::model::EndpointResponse>) -> Self {
            self.endpoint_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetEndpointOutput`](crate::output::GetEndpointOutput)
        pub fn build(self) -> crate::output::GetEndpointOutput {
            crate::output::GetEndpointOutput {
                endpoint_response: self.endpoint_response,
            }
        }
    }
}
impl GetEndpointOutput {
    /// Creates a new builder-style object to manufacture [`GetEndpointOutput`](crate::output::GetEndpointOutput)
    pub fn builder() -> crate::output::get_endpoint_output::Builder {
        crate::output::get_endpoint_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetGcmChannelOutput {
    pub gcm_channel_response: std::option::Option<crate::model::GcmChannelResponse>,
}
impl GetGcmChannelOutput {
    pub fn gcm_channel_response(&self) -> std::option::Option<&crate::model::GcmChannelResponse> {
        self.gcm_channel_response.as_ref()
    }
}
/// See [`GetGcmChannelOutput`](crate::output::GetGcmChannelOutput)
pub mod get_gcm_channel_output {
    /// A builder for [`GetGcmChannelOutput`](crate::output::GetGcmChannelOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) gcm_channel_response: std::option::Option<crate::model::GcmChannelResponse>,
    }
    impl Builder {
        pub fn gcm_channel_response(mut self, input: crate::model::GcmChannelResponse) -> Self {
            self.gcm_channel_response = Some(input);
            self
        }
        pub fn set_gcm_channel_response(mut self, input: std::option::Option<crate::model::GcmChannelResponse>) -> Self {
            self.gcm_channel_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetGcmChannelOutput`](crate::output::GetGcmChannelOutput)
        pub fn build(self) -> crate::output::GetGcmChannelOutput {
            crate::output::GetGcmChannelOutput {
                gcm_channel_response: self.gcm_channel_response,
            }
        }
    }
}
impl GetGcmChannelOutput {
    /// Creates a new builder-style object to manufacture [`GetGcmChannelOutput`](crate::output::GetGcmChannelOutput)
    pub fn builder() -> crate::output::get_gcm_channel_output::Builder {
        crate::output::get_gcm_channel_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetImportJobOutput {
    pub import_job_response: std::option::Option<crate::model::ImportJobResponse>,
}
impl GetImportJobOutput {
    pub fn import_job_response(&self) -> std::option::Option<&crate::model::ImportJobResponse> {
        self.import_job_response.as_ref()
    }
}
/// See [`GetImportJobOutput`](crate::output::GetImportJobOutput)
pub mod get_import_job_output {
    /// A builder for [`GetImportJobOutput`](crate::output::GetImportJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) import_job_response: std::option::Option<crate::model::ImportJobResponse>,
    }
    impl Builder {
        pub fn import_job_response(mut self, input: crate::model::ImportJobResponse) -> Self {
            self.import_job_response = Some(input);
            self
        }
        pub fn set_import_job_response(mut self, input: std::option::Option<crate::model::ImportJobResponse>) -> Self {
            self.import_job_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetImportJobOutput`](crate::output::GetImportJobOutput)
        pub fn build(self) -> crate::output::GetImportJobOutput {
            crate::output::GetImportJobOutput {
                import_job_response: self.import_job_response,
            }
        }
    }
}
impl GetImportJobOutput {
    /// Creates a new builder-style object to manufacture [`GetImportJobOutput`](crate::output::GetImportJobOutput)
    pub fn builder() -> crate::output::get_import_job_output::Builder {
        crate::output::get_import_job_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetImportJobsOutput {
    pub import_jobs_response: std::option::Option<crate::model::ImportJobsResponse>,
}
impl GetImportJobsOutput {
    pub fn import_jobs_response(&self) -> std::option::Option<&crate::model::ImportJobsResponse> {
        self.import_jobs_response.as_ref()
    }
}
/// See [`GetImportJobsOutput`](crate::output::GetImportJobsOutput)
pub mod get_import_jobs_output {
    /// A builder for [`GetImportJobsOutput`](crate::output::GetImportJobsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) import_jobs_response: std::option::Option<crate::model::ImportJobsResponse>,
    }
    impl Builder {
        pub fn import_jobs_response(mut self, input: crate::model::ImportJobsResponse) -> Self {
            self.import_jobs_response = Some(input);
            self
        }
        pub fn set_import_jobs_response(mut self, input: std::option::Option<crate::model::ImportJobsResponse>) -> Self {
            self.import_jobs_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetImportJobsOutput`](crate::output::GetImportJobsOutput)
        pub fn build(self) -> crate::output::GetImportJobsOutput {
            crate::output::GetImportJobsOutput {
                import_jobs_response: self.import_jobs_response,
            }
        }
    }
}
impl GetImportJobsOutput {
    /// Creates a new builder-style object to manufacture [`GetImportJobsOutput`](crate::output::GetImportJobsOutput)
    pub fn builder() -> crate::output::get_import_jobs_output::Builder {
        crate::output::get_import_jobs_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetSegmentOutput {
    pub segment_response: std::option::Option<crate::model::SegmentResponse>,
}
impl GetSegmentOutput {
    pub fn segment_response(&self) -> std::option::Option<&crate::model::SegmentResponse> {
        self.segment_response.as_ref()
    }
}
/// See [`GetSegmentOutput`](crate::output::GetSegmentOutput)
pub mod get_segment_output {
    /// A builder for [`GetSegmentOutput`](crate::output::GetSegmentOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segment_response: std::option::Option<crate::model::SegmentResponse>,
    }
    impl Builder {
        pub fn segment_response(mut self, input: crate::model::SegmentResponse) -> Self {
            self.segment_response = Some(input);
            self
        }
        pub fn set_segment_response(mut self, input: std::option::Option<crate::model::SegmentResponse>) -> Self {
            self.segment_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetSegmentOutput`](crate::output::GetSegmentOutput)
        pub fn build(self) -> crate::output::GetSegmentOutput {
            crate::output::GetSegmentOutput {
                segment_response: self.segment_response,
            }
        }
    }
}
impl GetSegmentOutput {
    /// Creates a new builder-style object to manufacture [`GetSegmentOutput`](crate::output::GetSegmentOutput)
    pub fn builder() -> crate::output::get_segment_output::Builder {
        crate::output::get_segment_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetSegmentImportJobsOutput {
    pub import_jobs_response: std::option::Option<crate::model::ImportJobsResponse>,
}
impl GetSegmentImportJobsOutput {
    pub fn import_jobs_response(&self) -> std::option::Option<&crate::model::ImportJobsResponse> {
        self.import_jobs_response.as_ref()
    }
}
/// See [`GetSegmentImportJobsOutput`](crate::output::GetSegmentImportJobsOutput)
pub mod get_segment_import_jobs_output {
    /// A builder for [`GetSegmentImportJobsOutput`](crate::output::GetSegmentImportJobsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) import_jobs_response: std::option::Option<crate::model::ImportJobsResponse>,
    }
    impl Builder {
        pub fn import_jobs_response(mut self, input: crate::model::ImportJobsResponse) -> Self {
            self.import_jobs_response = Some(input);
            self
        }
        pub fn set_import_jobs_response(mut self, input: std::option::Option<crate::model::ImportJobsResponse>) -> Self {
            self.import_jobs_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetSegmentImportJobsOutput`](crate::output::GetSegmentImportJobsOutput)
        pub fn build(self) -> crate::output::GetSegmentImportJobsOutput {
            crate::output::GetSegmentImportJobsOutput {
                import_jobs_response: self.import_jobs_response,
            }
        }
    }
}
impl GetSegmentImportJobsOutput {
    /// Creates a new builder-style object to manufacture [`GetSegmentImportJobsOutput`](crate::output::GetSegmentImportJobsOutput)
    pub fn builder() -> crate::output::get_segment_import_jobs_output::Builder {
        crate::output::get_segment_import_jobs_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetSegmentVersionOutput {
    pub segment_response: std::option::Option<crate::model::SegmentResponse>,
}
impl GetSegmentVersionOutput {
    pub fn segment_response(&self) -> std::option::Option<&crate::model::SegmentResponse> {
        self.segment_response.as_ref()
    }
}
/// See [`GetSegmentVersionOutput`](crate::output::GetSegmentVersionOutput)
pub mod get_segment_version_output {
    /// A builder for [`GetSegmentVersionOutput`](crate::output::GetSegmentVersionOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segment_response: std::option::Option<crate::model::SegmentResponse>,
    }
    impl Builder {
        pub fn segment_response(mut self, input: crate::model::SegmentResponse) -> Self {
            self.segment_response = Some(input);
            self
        }
        pub fn set_segment_response(mut self, input: std::option::Option<crate::model::SegmentResponse>) -> Self {
            self.segment_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetSegmentVersionOutput`](crate::output::GetSegmentVersionOutput)
        pub fn build(self) -> crate::output::GetSegmentVersionOutput {
            crate::output::GetSegmentVersionOutput {
                segment_response: self.segment_response,
            }
        }
    }
}
impl GetSegmentVersionOutput {
    /// Creates a new builder-style object to manufacture [`GetSegmentVersionOutput`](crate::output::GetSegmentVersionOutput)
    pub fn builder() -> crate::output::get_segment_version_output::Builder {
        crate::output::get_segment_version_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetSegmentVersionsOutput {
    pub segments_response: std::option::Option<crate::model::SegmentsResponse>,
}
impl GetSegmentVersionsOutput {
    pub fn segments_response(&self) -> std::option::Option<&crate::model::SegmentsResponse> {
        self.segments_response.as_ref()
    }
}
/// See [`GetSegmentVersionsOutput`](crate::output::GetSegmentVersionsOutput)
pub mod get_segment_versions_output {
    /// A builder for [`GetSegmentVersionsOutput`](crate::output::GetSegmentVersionsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segments_response: std::option::Option<crate::model::SegmentsResponse>,
    }
    impl Builder {
        pub fn segments_response(mut self, input: crate::model::SegmentsResponse) -> Self {
            self.segments_response = Some(input);
            self
        }
        pub fn set_segments_response(mut self, input: std::option::Option<crate::model::SegmentsResponse>) -> Self {
            self.segments_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetSegmentVersionsOutput`](crate::output::GetSegmentVersionsOutput)
        pub fn build(self) -> crate::output::GetSegmentVersionsOutput {
            crate::output::GetSegmentVersionsOutput {
                segments_response: self.segments_response,
            }
        }
    }
}
impl GetSegmentVersionsOutput {
    /// Creates a new builder-style object to manufacture [`GetSegmentVersionsOutput`](crate::output::GetSegmentVersionsOutput)
    pub fn builder() -> crate::output::get_segment_versions_output::Builder {
        crate::output::get_segment_versions_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetSegmentsOutput {
    pub segments_response: std::option::Option<crate::model::SegmentsResponse>,
}
impl GetSegmentsOutput {
    pub fn segments_response(&self) -> std::option::Option<&crate::model::SegmentsResponse> {
        self.segments_response.as_ref()
    }
}
/// See [`GetSegmentsOutput`](crate::output::GetSegmentsOutput)
pub mod get_segments_output {
    /// A builder for [`GetSegmentsOutput`](crate::output::GetSegmentsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segments_response: std::option::Option<crate::model::SegmentsResponse>,
    }
    impl Builder {
        pub fn segments_response(mut self, input: crate::model::SegmentsResponse) -> Self {
            self.segments_response = Some(input);
            self
        }
        pub fn set_segments_response(mut self, input: std::option::Option<crate::model::SegmentsResponse>) -> Self {
            self.segments_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetSegmentsOutput`](crate::output::GetSegmentsOutput)
        pub fn build(self) -> crate::output::GetSegmentsOutput {
            crate::output::GetSegmentsOutput {
                segments_response: self.segments_response,
            }
        }
    }
}
impl GetSegmentsOutput {
    /// Creates a new builder-style object to manufacture [`GetSegmentsOutput`](crate::output::GetSegmentsOutput)
    pub fn builder() -> crate::output::get_segments_output::Builder {
        crate::output::get_segments_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct UpdateApnsChannelOutput {
    pub apns_channel_response: std::option::Option<crate::model::ApnsChannelResponse>,
}
impl UpdateApnsChannelOutput {
    pub fn apns_channel_response(&self) -> std::option::Option<&crate::model::ApnsChannelResponse> {
        self.apns_channel_response.as_ref()
    }
}
/// See [`UpdateApnsChannelOutput`](crate::output::UpdateApnsChannelOutput)
pub mod update_apns_channel_output {
    /// A builder for [`UpdateApnsChannelOutput`](crate::output::UpdateApnsChannelOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) apns_channel_response: std::option::Option<crate::model::ApnsChannelResponse>,
    }
    impl Builder {
        pub fn apns_channel_response(mut self, input: crate::model::ApnsChannelResponse) -> Self {
            self.apns_channel_response = Some(input);
            self
        }
        pub fn set_apns_channel_response(mut self, input: std::option::Option<crate::model::ApnsChannelResponse>) -> Self {
            self.apns_channel_response = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateApnsChannelOutput`](crate::output::UpdateApnsChannelOutput)
        pub fn build(self) -> crate::output::UpdateApnsChannelOutput {
            crate::output::UpdateApnsChannelOutput {
                apns_channel_response: self.apns_channel_response,
            }
        }
    }
}
impl UpdateApnsChannelOutput {
    /// Creates a new builder-style object to manufacture [`UpdateApnsChannelOutput`](crate::output::UpdateApnsChannelOutput)
    pub fn builder() -> crate::output::update_apns_channel_output::Builder {
        crate::output::update_apns_channel_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct UpdateApplicationSettingsOutput {
    pub application_settings_resource: std::option::Option<crate::model::ApplicationSettingsResource>,
}
impl UpdateApplicationSettingsOutput {
    pub fn application_settings_resource(&self) -> std::option::Option<&crate::model::ApplicationSettingsResource> {
        self.application_settings_resource.as_ref()
    }
}
/// See [`UpdateApplicationSettingsOutput`](crate::output::UpdateApplicationSettingsOutput)
pub mod update_application_settings_output {
    /// A builder for [`UpdateApplicationSettingsOutput`](crate::output::UpdateApplicationSettingsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_settings_resource: std::option::Option<crate::model::ApplicationSettingsResource>,
    }
    impl Builder {
        pub fn application_settings_resource(mut self, input: crate::model::ApplicationSettingsResource) -> Self {
            self.application_settings_resource = Some(input);
            self
        }
        pub fn set_application_settings_resource(mut self, input: std::option::Option<crate::model::ApplicationSettingsResource>) -> Self {
            self.application_settings_resource = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateApplicationSettingsOutput`](crate::output::UpdateApplicationSettingsOutput)
        pub fn build(self) -> crate::output::UpdateApplicationSettingsOutput {
            crate::output::UpdateApplicationSettingsOutput {
                application_settings_resource: self.application_settings_resource,
            }
        }
    }
}
impl UpdateApplicationSettingsOutput {
    /// Creates a new builder-style object to manufacture [`UpdateApplicationSettingsOutput`](crate::output::UpdateApplicationSettingsOutput)
    pub fn builder() -> crate::output::update_application_settings_output::Builder {
        crate::output::update_application_settings_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct UpdateCampaignOutput {
    pub campaign_response: std::option::Option<crate::model::CampaignResponse>,
}
impl UpdateCampaignOutput {
    pub fn campaign_response(&self) -> std::option::Option<&crate::model::CampaignResponse> {
        self.campaign_response.as_ref()
    }
}
/// See [`UpdateCampaignOutput`](crate::output::UpdateCampaignOutput)
pub mod update_campaign_output {
    /// A builder for [`UpdateCampaignOutput`](crate::output::UpdateCampaignOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaign_response: std::option::Option<crate::model::CampaignResponse>,
    }
    impl Builder {
        pub fn campaign_response(mut self, input: crate::model::CampaignResponse) -> Self {
            self.campaign_response = Some(input);
            self
        }
        pub fn set_campaign_response(mut self, input: std::option::Option<crate::model::CampaignResponse>) -> Self {
            self.campaign_response = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateCampaignOutput`](crate::output::UpdateCampaignOutput)
        pub fn build(self) -> crate::output::UpdateCampaignOutput {
            crate::output::UpdateCampaignOutput {
                campaign_response: self.campaign_response,
            }
        }
    }
}
impl UpdateCampaignOutput {
    /// Creates a new builder-style object to manufacture [`UpdateCampaignOutput`](crate::output::UpdateCampaignOutput)
    pub fn builder() -> crate::output::update_campaign_output::Builder {
        crate::output::update_campaign_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct UpdateEndpointOutput {
    pub message_body: std::option::Option<crate::model::MessageBody>,
}
impl UpdateEndpointOutput {
    pub fn message_body(&self) -> std::option::Option<&crate::model::MessageBody> {
        self.message_body.as_ref()
    }
}
/// See [`UpdateEndpointOutput`](crate::output::UpdateEndpointOutput)
pub mod update_endpoint_output {
    /// A builder for [`UpdateEndpointOutput`](crate::output::UpdateEndpointOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message_body: std::option::Option<crate::model::MessageBody>,
    }
    impl Builder {
        pub fn message_body(mut self, input: crate::model::MessageBody) -> Self {
            self.message_body = Some(input);
            self
        }
        pub fn set_message_body(mut self, input: std::option::Option<crate::model::MessageBody>) -> Self {
            self.message_body = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateEndpointOutput`](crate::output::UpdateEndpointOutput)
        pub fn build(self) -> crate::output::UpdateEndpointOutput {
            crate::output::UpdateEndpointOutput {
                message_body: self.message_body,
            }
        }
    }
}
impl UpdateEndpointOutput {
    /// Creates a new builder-style object to manufacture [`UpdateEndpointOutput`](crate::output::UpdateEndpointOutput)
    pub fn builder() -> crate::output::update_endpoint_output::Builder {
        crate::output::update_endpoint_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct UpdateEndpointsBatchOutput {
    pub message_body: std::option::Option<crate::model::MessageBody>,
}
impl UpdateEndpointsBatchOutput {
    pub fn message_body(&self) -> std::option::Option<&crate::model::MessageBody> {
        self.message_body.as_ref()
    }
}
/// See [`UpdateEndpointsBatchOutput`](crate::output::UpdateEndpointsBatchOutput)
pub mod update_endpoints_batch_output {
    /// A builder for [`UpdateEndpointsBatchOutput`](crate::output::UpdateEndpointsBatchOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message_body: std::option::Option<crate::model::MessageBody>,
    }
    impl Builder {
        pub fn message_body(mut self, input: crate::model::MessageBody) -> Self {
            self.message_body = Some(input);
            self
        }
        pub fn set_message_body(mut self, input: std::option::Option<crate::model::MessageBody>) -> Self {
            self.message_body = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateEndpointsBatchOutput`](crate::output::UpdateEndpointsBatchOutput)
        pub fn build(self) -> crate::output::UpdateEndpointsBatchOutput {
            crate::output::UpdateEndpointsBatchOutput {
                message_body: self.message_body,
            }
        }
    }
}
impl UpdateEndpointsBatchOutput {
    /// Creates a new builder-style object to manufacture [`UpdateEndpointsBatchOutput`](crate::output::UpdateEndpointsBatchOutput)
    pub fn builder() -> crate::output::update_endpoints_batch_output::Builder {
        crate::output::update_endpoints_batch_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct UpdateGcmChannelOutput {
    pub gcm_channel_response: std::option::Option<crate::model::GcmChannelResponse>,
}
impl UpdateGcmChannelOutput {
    pub fn gcm_channel_response(&self) -> std::option::Option<&crate::model::GcmChannelResponse> {
        self.gcm_channel_response.as_ref()
    }
}
/// See [`UpdateGcmChannelOutput`](crate::output::UpdateGcmChannelOutput)
pub mod update_gcm_channel_output {
    /// A builder for [`UpdateGcmChannelOutput`](crate::output::UpdateGcmChannelOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) gcm_channel_response: std::option::Option<crate::model::GcmChannelResponse>,
    }
    impl Builder {
        pub fn gcm_channel_response(mut self, input: crate::model::GcmChannelResponse) -> Self {
            self.gcm_channel_response = Some(input);
            self
        }
        pub fn set_gcm_channel_response(mut self, input: std::option::Option<crate::model::GcmChannelResponse>) -> Self {
            self.gcm_channel_response = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateGcmChannelOutput`](crate::output::UpdateGcmChannelOutput)
        pub fn build(self) -> crate::output::UpdateGcmChannelOutput {
            crate::output::UpdateGcmChannelOutput {
                gcm_channel_response: self.gcm_channel_response,
            }
        }
    }
}
impl UpdateGcmChannelOutput {
    /// Creates a new builder-style object to manufacture [`UpdateGcmChannelOutput`](crate::output::UpdateGcmChannelOutput)
    pub fn builder() -> crate::output::update_gcm_channel_output::Builder {
        crate::output::update_gcm_channel_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct UpdateSegmentOutput {
    pub segment_response: std::option::Option<crate::model::SegmentResponse>,
}
impl UpdateSegmentOutput {
    pub fn segment_response(&self) -> std::option::Option<&crate::model::SegmentResponse> {
        self.segment_response.as_ref()
    }
}
/// See [`UpdateSegmentOutput`](crate::output::UpdateSegmentOutput)
pub mod update_segment_output {
    /// A builder for [`UpdateSegmentOutput`](crate::output::UpdateSegmentOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segment_response: std::option::Option<crate::model::SegmentResponse>,
    }
    impl Builder {
        pub fn segment_response(mut self, input: crate::model::SegmentResponse) -> Self {
            self.segment_response = Some(input);
            self
        }
        pub fn set_segment_response(mut self, input: std::option::Option<crate::model::SegmentResponse>) -> Self {
            self.segment_response = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateSegmentOutput`](crate::output::UpdateSegmentOutput)
        pub fn build(self) -> crate::output::UpdateSegmentOutput {
            crate::output::UpdateSegmentOutput {
                segment_response: self.segment_response,
            }
        }
    }
}
impl UpdateSegmentOutput {
    /// Creates a new builder-style object to manufacture [`UpdateSegmentOutput`](crate::output::UpdateSegmentOutput)
    pub fn builder() -> crate::output::update_segment_output::Builder {
        crate::output::update_segment_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct SendMessagesOutput {
    pub message_response: std::option::Option<crate::model::MessageResponse>,
}
impl SendMessagesOutput {
    pub fn message_response(&self) -> std::option::Option<&crate::model::MessageResponse> {
        self.message_response.as_ref()
    }
}
/// See [`SendMessagesOutput`](crate::output::SendMessagesOutput)
pub mod send_messages_output {
    /// A builder for [`SendMessagesOutput`](crate::output::SendMessagesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message_response: std::option::Option<crate::model::MessageResponse>,
    }
    impl Builder {
        pub fn message_response(mut self, input: crate::model::MessageResponse) -> Self {
            self.message_response = Some(input);
            self
        }
        pub fn set_message_response(mut self, input: std::option::Option<crate::model::MessageResponse>) -> Self {
            self.message_response = input;
            self
        }
        /// Consumes the builder and constructs a [`SendMessagesOutput`](crate::output::SendMessagesOutput)
        pub fn build(self) -> crate::output::SendMessagesOutput {
            crate::output::SendMessagesOutput {
                message_response: self.message_response,
            }
        }
    }
}
impl SendMessagesOutput {
    /// Creates a new builder-style object to manufacture [`SendMessagesOutput`](crate::output::SendMessagesOutput)
    pub fn builder() -> crate::output::send_messages_output::Builder {
        crate::output::send_messages_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct CreateJourneyOutput {
    pub journey_response: std::option::Option<crate::model::JourneyResponse>,
}
impl CreateJourneyOutput {
    pub fn journey_response(&self) -> std::option::Option<&crate::model::JourneyResponse> {
        self.journey_response.as_ref()
    }
}
/// See [`CreateJourneyOutput`](crate::output::CreateJourneyOutput)
pub mod create_journey_output {
    /// A builder for [`CreateJourneyOutput`](crate::output::CreateJourneyOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) journey_response: std::option::Option<crate::model::JourneyResponse>,
    }
    impl Builder {
        pub fn journey_response(mut self, input: crate::model::JourneyResponse) -> Self {
            self.journey_response = Some(input);
            self
        }
        pub fn set_journey_response(mut self, input: std::option::Option<crate::model::JourneyResponse>) -> Self {
            self.journey_response = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateJourneyOutput`](crate::output::CreateJourneyOutput)
        pub fn build(self) -> crate::output::CreateJourneyOutput {
            crate::output::CreateJourneyOutput {
                journey_response: self.journey_response,
            }
        }
    }
}
impl CreateJourneyOutput {
    /// Creates a new builder-style object to manufacture [`CreateJourneyOutput`](crate::output::CreateJourneyOutput)
    pub fn builder() -> crate::output::create_journey_output::Builder {
        crate::output::create_journey_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetJourneyOutput {
    pub journey_response: std::option::Option<crate::model::JourneyResponse>,
}
impl GetJourneyOutput {
    pub fn journey_response(&self) -> std::option::Option<&crate::model::JourneyResponse> {
        self.journey_response.as_ref()
    }
}
/// See [`GetJourneyOutput`](crate::output::GetJourneyOutput)
pub mod get_journey_output {
    /// A builder for [`GetJourneyOutput`](crate::output::GetJourneyOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) journey_response: std::option::Option<crate::model::JourneyResponse>,
    }
    impl Builder {
        pub fn journey_response(mut self, input: crate::model::JourneyResponse) -> Self {
            self.journey_response = Some(input);
            self
        }
        pub fn set_journey_response(mut self, input: std::option::Option<crate::model::JourneyResponse>) -> Self {
            self.journey_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetJourneyOutput`](crate::output::GetJourneyOutput)
        pub fn build(self) -> crate::output::GetJourneyOutput {
            crate::output::GetJourneyOutput {
                journey_response: self.journey_response,
            }
        }
    }
}
impl GetJourneyOutput {
    /// Creates a new builder-style object to manufacture [`GetJourneyOutput`](crate::output::GetJourneyOutput)
    pub fn builder() -> crate::output::get_journey_output::Builder {
        crate::output::get_journey_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct UpdateJourneyOutput {
    pub journey_response: std::option::Option<crate::model::JourneyResponse>,
}
impl UpdateJourneyOutput {
    pub fn journey_response(&self) -> std::option::Option<&crate::model::JourneyResponse> {
        self.journey_response.as_ref()
    }
}
/// See [`UpdateJourneyOutput`](crate::output::UpdateJourneyOutput)
pub mod update_journey_output {
    /// A builder for [`UpdateJourneyOutput`](crate::output::UpdateJourneyOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) journey_response: std::option::Option<crate::model::JourneyResponse>,
    }
    impl Builder {
        pub fn journey_response(mut self, input: crate::model::JourneyResponse) -> Self {
            self.journey_response = Some(input);
            self
        }
        pub fn set_journey_response(mut self, input: std::option::Option<crate::model::JourneyResponse>) -> Self {
            self.journey_response = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateJourneyOutput`](crate::output::UpdateJourneyOutput)
        pub fn build(self) -> crate::output::UpdateJourneyOutput {
            crate::output::UpdateJourneyOutput {
                journey_response: self.journey_response,
            }
        }
    }
}
impl UpdateJourneyOutput {
    /// Creates a new builder-style object to manufacture [`UpdateJourneyOutput`](crate::output::UpdateJourneyOutput)
    pub fn builder() -> crate::output::update_journey_output::Builder {
        crate::output::update_journey_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct DeleteJourneyOutput {
    pub journey_response: std::option::Option<crate::model::JourneyResponse>,
}
impl DeleteJourneyOutput {
    pub fn journey_response(&self) -> std::option::Option<&crate::model::JourneyResponse> {
        self.journey_response.as_ref()
    }
}
/// See [`DeleteJourneyOutput`](crate::output::DeleteJourneyOutput)
pub mod delete_journey_output {
    /// A builder for [`DeleteJourneyOutput`](crate::output::DeleteJourneyOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) journey_response: std::option::Option<crate::model::JourneyResponse>,
    }
    impl Builder {
        pub fn journey_response(mut self, input: crate::model::JourneyResponse) -> Self {
            self.journey_response = Some(input);
            self
        }
        pub fn set_journey_response(mut self, input: std::option::Option<crate::model::JourneyResponse>) -> Self {
            self.journey_response = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteJourneyOutput`](crate::output::DeleteJourneyOutput)
        pub fn build(self) -> crate::output::DeleteJourneyOutput {
            crate::output::DeleteJourneyOutput {
                journey_response: self.journey_response,
            }
        }
    }
}
impl DeleteJourneyOutput {
    /// Creates a new builder-style object to manufacture [`DeleteJourneyOutput`](crate::output::DeleteJourneyOutput)
    pub fn builder() -> crate::output::delete_journey_output::Builder {
        crate::output::delete_journey_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct ListJourneysOutput {
    pub journeys_response: std::option::Option<crate::model::JourneysResponse>,
}
impl ListJourneysOutput {
    pub fn journeys_response(&self) -> std::option::Option<&crate::model::JourneysResponse> {
        self.journeys_response.as_ref()
    }
}
/// See [`ListJourneysOutput`](crate::output::ListJourneysOutput)
pub mod list_journeys_output {
    /// A builder for [`ListJourneysOutput`](crate::output::ListJourneysOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) journeys_response: std::option::Option<crate::model::JourneysResponse>,
    }
    impl Builder {
        pub fn journeys_response(mut self, input: crate::model::JourneysResponse) -> Self {
            self.journeys_response = Some(input);
            self
        }
        pub fn set_journeys_response(mut self, input: std::option::Option<crate::model::JourneysResponse>) -> Self {
            self.journeys_response = input;
            self
        }
        /// Consumes the builder and constructs a [`ListJourneysOutput`](crate::output::ListJourneysOutput)
        pub fn build(self) -> crate::output::ListJourneysOutput {
            crate::output::ListJourneysOutput {
                journeys_response: self.journeys_response,
            }
        }
    }
}
impl ListJourneysOutput {
    /// Creates a new builder-style object to manufacture [`ListJourneysOutput`](crate::output::ListJourneysOutput)
    pub fn builder() -> crate::output::list_journeys_output::Builder {
        crate::output::list_journeys_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetJourneyExecutionMetricsOutput {
    pub journey_execution_metrics_response: std::option::Option<crate::model::JourneyExecutionMetricsResponse>,
}
impl GetJourneyExecutionMetricsOutput {
    pub fn journey_execution_metrics_response(&self) -> std::option::Option<&crate::model::JourneyExecutionMetricsResponse> {
        self.journey_execution_metrics_response.as_ref()
    }
}
/// See [`GetJourneyExecutionMetricsOutput`](crate::output::GetJourneyExecutionMetricsOutput)
pub mod get_journey_execution_metrics_output {
    /// A builder for [`GetJourneyExecutionMetricsOutput`](crate::output::GetJourneyExecutionMetricsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) journey_execution_metrics_response: std::option::Option<crate::model::JourneyExecutionMetricsResponse>,
    }
    impl Builder {
        pub fn journey_execution_metrics_response(mut self, input: crate::model::JourneyExecutionMetricsResponse) -> Self {
            self.journey_execution_metrics_response = Some(input);
            self
        }
        pub fn set_journey_execution_metrics_response(mut self, input: std::option::Option<crate::model::JourneyExecutionMetricsResponse>) -> Self {
            self.journey_execution_metrics_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetJourneyExecutionMetricsOutput`](crate::output::GetJourneyExecutionMetricsOutput)
        pub fn build(self) -> crate::output::GetJourneyExecutionMetricsOutput {
            crate::output::GetJourneyExecutionMetricsOutput {
                journey_execution_metrics_response: self.journey_execution_metrics_response,
            }
        }
    }
}
impl GetJourneyExecutionMetricsOutput {
    /// Creates a new builder-style object to manufacture [`GetJourneyExecutionMetricsOutput`](crate::output::GetJourneyExecutionMetricsOutput)
    pub fn builder() -> crate::output::get_journey_execution_metrics_output::Builder {
        crate::output::get_journey_execution_metrics_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct CreateEmailTemplateOutput {
    pub create_template_message_body: std::option::Option<crate::model::CreateTemplateMessageBody>,
}
impl CreateEmailTemplateOutput {
    pub fn create_template_message_body(&self) -> std::option::Option<&crate::model::CreateTemplateMessageBody> {
        self.create_template_message_body.as_ref()
    }
}
/// See [`CreateEmailTemplateOutput`](crate::output::CreateEmailTemplateOutput)
pub mod create_email_template_output {
    /// A builder for [`CreateEmailTemplateOutput`](crate::output::CreateEmailTemplateOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) create_template_message_body: std::option::Option<crate::model::CreateTemplateMessageBody>,
    }
    impl Builder {
        pub fn create_template_message_body(mut self, input: crate::model::CreateTemplateMessageBody) -> Self {
            self.create_template_message_body = Some(input);
            self
        }
        pub fn set_create_template_message_body(mut self, input: std::option::Option<crate::model::CreateTemplateMessageBody>) -> Self {
            self.create_template_message_body = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateEmailTemplateOutput`](crate::output::CreateEmailTemplateOutput)
        pub fn build(self) -> crate::output::CreateEmailTemplateOutput {
            crate::output::CreateEmailTemplateOutput {
                create_template_message_body: self.create_template_message_body,
            }
        }
    }
}
impl CreateEmailTemplateOutput {
    /// Creates a new builder-style object to manufacture [`CreateEmailTemplateOutput`](crate::output::CreateEmailTemplateOutput)
    pub fn builder() -> crate::output::create_email_template_output::Builder {
        crate::output::create_email_template_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetEmailTemplateOutput {
    pub email_template_response: std::option::Option<crate::model::EmailTemplateResponse>,
}
impl GetEmailTemplateOutput {
    pub fn email_template_response(&self) -> std::option::Option<&crate::model::EmailTemplateResponse> {
        self.email_template_response.as_ref()
    }
}
/// See [`GetEmailTemplateOutput`](crate::output::GetEmailTemplateOutput)
pub mod get_email_template_output {
    /// A builder for [`GetEmailTemplateOutput`](crate::output::GetEmailTemplateOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) email_template_response: std::option::Option<crate::model::EmailTemplateResponse>,
    }
    impl Builder {
        pub fn email_template_response(mut self, input: crate::model::EmailTemplateResponse) -> Self {
            self.email_template_response = Some(input);
            self
        }
        pub fn set_email_template_response(mut self, input: std::option::Option<crate::model::EmailTemplateResponse>) -> Self {
            self.email_template_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetEmailTemplateOutput`](crate::output::GetEmailTemplateOutput)
        pub fn build(self) -> crate::output::GetEmailTemplateOutput {
            crate::output::GetEmailTemplateOutput {
                email_template_response: self.email_template_response,
            }
        }
    }
}
impl GetEmailTemplateOutput {
    /// Creates a new builder-style object to manufacture [`GetEmailTemplateOutput`](crate::output::GetEmailTemplateOutput)
    pub fn builder() -> crate::output::get_email_template_output::Builder {
        crate::output::get_email_template_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct ListTemplatesOutput {
    pub templates_response: std::option::Option<crate::model::TemplatesResponse>,
}
impl ListTemplatesOutput {
    pub fn templates_response(&self) -> std::option::Option<&crate::model::TemplatesResponse> {
        self.templates_response.as_ref()
    }
}
/// See [`ListTemplatesOutput`](crate::output::ListTemplatesOutput)
pub mod list_templates_output {
    /// A builder for [`ListTemplatesOutput`](crate::output::ListTemplatesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) templates_response: std::option::Option<crate::model::TemplatesResponse>,
    }
    impl Builder {
        pub fn templates_response(mut self, input: crate::model::TemplatesResponse) -> Self {
            self.templates_response = Some(input);
            self
        }
        pub fn set_templates_response(mut self, input: std::option::Option<crate::model::TemplatesResponse>) -> Self {
            self.templates_response = input;
            self
        }
        /// Consumes the builder and constructs a [`ListTemplatesOutput`](crate::output::ListTemplatesOutput)
        pub fn build(self) -> crate::output::ListTemplatesOutput {
            crate::output::ListTemplatesOutput {
                templates_response: self.templates_response,
            }
        }
    }
}
impl ListTemplatesOutput {
    /// Creates a new builder-style object to manufacture [`ListTemplatesOutput`](crate::output::ListTemplatesOutput)
    pub fn builder() -> crate::output::list_templates_output::Builder {
        crate::output::list_templates_output::Builder::default()
    }
}
