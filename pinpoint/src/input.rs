/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// See [`CreateCampaignInput`](crate::input::CreateCampaignInput)
pub mod create_campaign_input {
    /// A builder for [`CreateCampaignInput`](crate::input::CreateCampaignInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) write_campaign_request: std::option::Option<crate::model::WriteCampaignRequest>,
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
        pub fn write_campaign_request(mut self, input: crate::model::WriteCampaignRequest) -> Self {
            self.write_campaign_request = Some(input);
            self
        }
        pub fn set_write_campaign_request(mut self, input: std::option::Option<crate::model::WriteCampaignRequest>) -> Self {
            self.write_campaign_request = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateCampaignInput`](crate::input::CreateCampaignInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateCampaignInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateCampaignInput {
                application_id: self.application_id,
                write_campaign_request: self.write_campaign_request,
            })
        }
    }
}
impl CreateCampaignInput {
    /// Marshals this input into an Operation<[`CreateCampaign`](crate::operation::CreateCampaign)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateCampaign, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::from(self.build_body()?);
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::CreateCampaign::new(),
            "CreateCampaign",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/campaigns",
            ApplicationId = application_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("POST").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        let builder = builder.header("Content-Type", "application/json");
        self.update_http_builder(builder)
    }
    fn build_body(&self) -> std::result::Result<std::vec::Vec<u8>, smithy_http::operation::BuildError> {
        let payload = self.write_campaign_request.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "write_campaign_request",
                details: "the request payload is required",
            },
        )?;
        serde_json::to_vec(payload).map_err(smithy_http::operation::BuildError::serialization)
    }
    /// Creates a new builder-style object to manufacture [`CreateCampaignInput`](crate::input::CreateCampaignInput)
    pub fn builder() -> crate::input::create_campaign_input::Builder {
        crate::input::create_campaign_input::Builder::default()
    }
}

/// See [`CreateImportJobInput`](crate::input::CreateImportJobInput)
pub mod create_import_job_input {
    /// A builder for [`CreateImportJobInput`](crate::input::CreateImportJobInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) import_job_request: std::option::Option<crate::model::ImportJobRequest>,
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
        pub fn import_job_request(mut self, input: crate::model::ImportJobRequest) -> Self {
            self.import_job_request = Some(input);
            self
        }
        pub fn set_import_job_request(mut self, input: std::option::Option<crate::model::ImportJobRequest>) -> Self {
            self.import_job_request = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateImportJobInput`](crate::input::CreateImportJobInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateImportJobInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateImportJobInput {
                application_id: self.application_id,
                import_job_request: self.import_job_request,
            })
        }
    }
}
impl CreateImportJobInput {
    /// Marshals this input into an Operation<[`CreateImportJob`](crate::operation::CreateImportJob)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateImportJob, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::from(self.build_body()?);
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::CreateImportJob::new(),
            "CreateImportJob",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/jobs/import",
            ApplicationId = application_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("POST").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        let builder = builder.header("Content-Type", "application/json");
        self.update_http_builder(builder)
    }
    fn build_body(&self) -> std::result::Result<std::vec::Vec<u8>, smithy_http::operation::BuildError> {
        let payload = self.import_job_request.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "import_job_request",
                details: "the request payload is required",
            },
        )?;
        serde_json::to_vec(payload).map_err(smithy_http::operation::BuildError::serialization)
    }
    /// Creates a new builder-style object to manufacture [`CreateImportJobInput`](crate::input::CreateImportJobInput)
    pub fn builder() -> crate::input::create_import_job_input::Builder {
        crate::input::create_import_job_input::Builder::default()
    }
}

/// See [`CreateSegmentInput`](crate::input::CreateSegmentInput)
pub mod create_segment_input {
    /// A builder for [`CreateSegmentInput`](crate::input::CreateSegmentInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) write_segment_request: std::option::Option<crate::model::WriteSegmentRequest>,
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
        pub fn write_segment_request(mut self, input: crate::model::WriteSegmentRequest) -> Self {
            self.write_segment_request = Some(input);
            self
        }
        pub fn set_write_segment_request(mut self, input: std::option::Option<crate::model::WriteSegmentRequest>) -> Self {
            self.write_segment_request = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateSegmentInput`](crate::input::CreateSegmentInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateSegmentInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateSegmentInput {
                application_id: self.application_id,
                write_segment_request: self.write_segment_request,
            })
        }
    }
}
impl CreateSegmentInput {
    /// Marshals this input into an Operation<[`CreateSegment`](crate::operation::CreateSegment)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateSegment, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::from(self.build_body()?);
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::CreateSegment::new(),
            "CreateSegment",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/segments",
            ApplicationId = application_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("POST").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        let builder = builder.header("Content-Type", "application/json");
        self.update_http_builder(builder)
    }
    fn build_body(&self) -> std::result::Result<std::vec::Vec<u8>, smithy_http::operation::BuildError> {
        let payload = self.write_segment_request.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "write_segment_request",
                details: "the request payload is required",
            },
        )?;
        serde_json::to_vec(payload).map_err(smithy_http::operation::BuildError::serialization)
    }
    /// Creates a new builder-style object to manufacture [`CreateSegmentInput`](crate::input::CreateSegmentInput)
    pub fn builder() -> crate::input::create_segment_input::Builder {
        crate::input::create_segment_input::Builder::default()
    }
}

/// See [`DeleteApnsChannelInput`](crate::input::DeleteApnsChannelInput)
pub mod delete_apns_channel_input {
    /// A builder for [`DeleteApnsChannelInput`](crate::input::DeleteApnsChannelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DeleteApnsChannelInput`](crate::input::DeleteApnsChannelInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteApnsChannelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteApnsChannelInput {
                application_id: self.application_id,
            })
        }
    }
}
impl DeleteApnsChannelInput {
    /// Marshals this input into an Operation<[`DeleteApnsChannel`](crate::operation::DeleteApnsChannel)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteApnsChannel, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::DeleteApnsChannel::new(),
            "DeleteApnsChannel",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/channels/apns",
            ApplicationId = application_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("DELETE").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`DeleteApnsChannelInput`](crate::input::DeleteApnsChannelInput)
    pub fn builder() -> crate::input::delete_apns_channel_input::Builder {
        crate::input::delete_apns_channel_input::Builder::default()
    }
}

/// See [`DeleteCampaignInput`](crate::input::DeleteCampaignInput)
pub mod delete_campaign_input {
    /// A builder for [`DeleteCampaignInput`](crate::input::DeleteCampaignInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) campaign_id: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DeleteCampaignInput`](crate::input::DeleteCampaignInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteCampaignInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteCampaignInput {
                application_id: self.application_id,
                campaign_id: self.campaign_id,
            })
        }
    }
}
impl DeleteCampaignInput {
    /// Marshals this input into an Operation<[`DeleteCampaign`](crate::operation::DeleteCampaign)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteCampaign, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::DeleteCampaign::new(),
            "DeleteCampaign",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        let campaign_id = label(&self.campaign_id, "campaign_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/campaigns/{CampaignId}",
            ApplicationId = application_id,
            CampaignId = campaign_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("DELETE").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`DeleteCampaignInput`](crate::input::DeleteCampaignInput)
    pub fn builder() -> crate::input::delete_campaign_input::Builder {
        crate::input::delete_campaign_input::Builder::default()
    }
}

/// See [`DeleteGcmChannelInput`](crate::input::DeleteGcmChannelInput)
pub mod delete_gcm_channel_input {
    /// A builder for [`DeleteGcmChannelInput`](crate::input::DeleteGcmChannelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DeleteGcmChannelInput`](crate::input::DeleteGcmChannelInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteGcmChannelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteGcmChannelInput {
                application_id: self.application_id,
            })
        }
    }
}
impl DeleteGcmChannelInput {
    /// Marshals this input into an Operation<[`DeleteGcmChannel`](crate::operation::DeleteGcmChannel)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteGcmChannel, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::DeleteGcmChannel::new(),
            "DeleteGcmChannel",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/channels/gcm",
            ApplicationId = application_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("DELETE").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`DeleteGcmChannelInput`](crate::input::DeleteGcmChannelInput)
    pub fn builder() -> crate::input::delete_gcm_channel_input::Builder {
        crate::input::delete_gcm_channel_input::Builder::default()
    }
}

/// See [`DeleteSegmentInput`](crate::input::DeleteSegmentInput)
pub mod delete_segment_input {
    /// A builder for [`DeleteSegmentInput`](crate::input::DeleteSegmentInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) segment_id: std::option::Option<std::string::String>,
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
        pub fn segment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.segment_id = Some(input.into());
            self
        }
        pub fn set_segment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.segment_id = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteSegmentInput`](crate::input::DeleteSegmentInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteSegmentInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteSegmentInput {
                application_id: self.application_id,
                segment_id: self.segment_id,
            })
        }
    }
}
impl DeleteSegmentInput {
    /// Marshals this input into an Operation<[`DeleteSegment`](crate::operation::DeleteSegment)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteSegment, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::DeleteSegment::new(),
            "DeleteSegment",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        let segment_id = label(&self.segment_id, "segment_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/segments/{SegmentId}",
            ApplicationId = application_id,
            SegmentId = segment_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("DELETE").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`DeleteSegmentInput`](crate::input::DeleteSegmentInput)
    pub fn builder() -> crate::input::delete_segment_input::Builder {
        crate::input::delete_segment_input::Builder::default()
    }
}

/// See [`GetApnsChannelInput`](crate::input::GetApnsChannelInput)
pub mod get_apns_channel_input {
    /// A builder for [`GetApnsChannelInput`](crate::input::GetApnsChannelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`GetApnsChannelInput`](crate::input::GetApnsChannelInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetApnsChannelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetApnsChannelInput {
                application_id: self.application_id,
            })
        }
    }
}
impl GetApnsChannelInput {
    /// Marshals this input into an Operation<[`GetApnsChannel`](crate::operation::GetApnsChannel)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetApnsChannel, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::GetApnsChannel::new(),
            "GetApnsChannel",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/channels/apns",
            ApplicationId = application_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("GET").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`GetApnsChannelInput`](crate::input::GetApnsChannelInput)
    pub fn builder() -> crate::input::get_apns_channel_input::Builder {
        crate::input::get_apns_channel_input::Builder::default()
    }
}

/// See [`GetApplicationSettingsInput`](crate::input::GetApplicationSettingsInput)
pub mod get_application_settings_input {
    /// A builder for [`GetApplicationSettingsInput`](crate::input::GetApplicationSettingsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`GetApplicationSettingsInput`](crate::input::GetApplicationSettingsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetApplicationSettingsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetApplicationSettingsInput {
                application_id: self.application_id,
            })
        }
    }
}
impl GetApplicationSettingsInput {
    /// Marshals this input into an Operation<[`GetApplicationSettings`](crate::operation::GetApplicationSettings)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetApplicationSettings, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::GetApplicationSettings::new(),
            "GetApplicationSettings",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/settings",
            ApplicationId = application_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("GET").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`GetApplicationSettingsInput`](crate::input::GetApplicationSettingsInput)
    pub fn builder() -> crate::input::get_application_settings_input::Builder {
        crate::input::get_application_settings_input::Builder::default()
    }
}

/// See [`GetCampaignInput`](crate::input::GetCampaignInput)
pub mod get_campaign_input {
    /// A builder for [`GetCampaignInput`](crate::input::GetCampaignInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) campaign_id: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`GetCampaignInput`](crate::input::GetCampaignInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetCampaignInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetCampaignInput {
                application_id: self.application_id,
                campaign_id: self.campaign_id,
            })
        }
    }
}
impl GetCampaignInput {
    /// Marshals this input into an Operation<[`GetCampaign`](crate::operation::GetCampaign)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetCampaign, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::GetCampaign::new(),
            "GetCampaign",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        let campaign_id = label(&self.campaign_id, "campaign_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/campaigns/{CampaignId}",
            ApplicationId = application_id,
            CampaignId = campaign_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("GET").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`GetCampaignInput`](crate::input::GetCampaignInput)
    pub fn builder() -> crate::input::get_campaign_input::Builder {
        crate::input::get_campaign_input::Builder::default()
    }
}

/// See [`GetCampaignActivitiesInput`](crate::input::GetCampaignActivitiesInput)
pub mod get_campaign_activities_input {
    /// A builder for [`GetCampaignActivitiesInput`](crate::input::GetCampaignActivitiesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) campaign_id: std::option::Option<std::string::String>,
        pub(crate) page_size: std::option::Option<std::string::String>,
        pub(crate) token: std::option::Option<std::string::String>,
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
        pub fn page_size(mut self, input: impl Into<std::string::String>) -> Self {
            self.page_size = Some(input.into());
            self
        }
        pub fn set_page_size(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        pub fn token(mut self, input: impl Into<std::string::String>) -> Self {
            self.token = Some(input.into());
            self
        }
        pub fn set_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCampaignActivitiesInput`](crate::input::GetCampaignActivitiesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetCampaignActivitiesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetCampaignActivitiesInput {
                application_id: self.application_id,
                campaign_id: self.campaign_id,
                page_size: self.page_size,
                token: self.token,
            })
        }
    }
}
impl GetCampaignActivitiesInput {
    /// Marshals this input into an Operation<[`GetCampaignActivities`](crate::operation::GetCampaignActivities)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetCampaignActivities, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::GetCampaignActivities::new(),
            "GetCampaignActivities",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        let campaign_id = label(&self.campaign_id, "campaign_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/campaigns/{CampaignId}/activities",
            ApplicationId = application_id,
            CampaignId = campaign_id
        ));
        Ok(())
    }
    fn uri_query(&self, output: &mut std::string::String) {
        let mut query = smithy_http::query::Writer::new(output);
        query.push_optional("page-size", self.page_size.as_deref());
        query.push_optional("token", self.token.as_deref());
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        self.uri_query(&mut uri);
        Ok(builder.method("GET").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`GetCampaignActivitiesInput`](crate::input::GetCampaignActivitiesInput)
    pub fn builder() -> crate::input::get_campaign_activities_input::Builder {
        crate::input::get_campaign_activities_input::Builder::default()
    }
}

/// See [`GetCampaignVersionInput`](crate::input::GetCampaignVersionInput)
pub mod get_campaign_version_input {
    /// A builder for [`GetCampaignVersionInput`](crate::input::GetCampaignVersionInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) campaign_id: std::option::Option<std::string::String>,
        pub(crate) version: std::option::Option<std::string::String>,
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
        pub fn version(mut self, input: impl Into<std::string::String>) -> Self {
            self.version = Some(input.into());
            self
        }
        pub fn set_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.version = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCampaignVersionInput`](crate::input::GetCampaignVersionInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetCampaignVersionInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetCampaignVersionInput {
                application_id: self.application_id,
                campaign_id: self.campaign_id,
                version: self.version,
            })
        }
    }
}
impl GetCampaignVersionInput {
    /// Marshals this input into an Operation<[`GetCampaignVersion`](crate::operation::GetCampaignVersion)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetCampaignVersion, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::GetCampaignVersion::new(),
            "GetCampaignVersion",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        let campaign_id = label(&self.campaign_id, "campaign_id")?;
        let version = label(&self.version, "version")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/campaigns/{CampaignId}/versions/{Version}",
            ApplicationId = application_id,
            CampaignId = campaign_id,
            Version = version
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("GET").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`GetCampaignVersionInput`](crate::input::GetCampaignVersionInput)
    pub fn builder() -> crate::input::get_campaign_version_input::Builder {
        crate::input::get_campaign_version_input::Builder::default()
    }
}

/// See [`GetCampaignVersionsInput`](crate::input::GetCampaignVersionsInput)
pub mod get_campaign_versions_input {
    /// A builder for [`GetCampaignVersionsInput`](crate::input::GetCampaignVersionsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) campaign_id: std::option::Option<std::string::String>,
        pub(crate) page_size: std::option::Option<std::string::String>,
        pub(crate) token: std::option::Option<std::string::String>,
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
        pub fn page_size(mut self, input: impl Into<std::string::String>) -> Self {
            self.page_size = Some(input.into());
            self
        }
        pub fn set_page_size(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        pub fn token(mut self, input: impl Into<std::string::String>) -> Self {
            self.token = Some(input.into());
            self
        }
        pub fn set_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCampaignVersionsInput`](crate::input::GetCampaignVersionsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetCampaignVersionsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetCampaignVersionsInput {
                application_id: self.application_id,
                campaign_id: self.campaign_id,
                page_size: self.page_size,
                token: self.token,
            })
        }
    }
}
impl GetCampaignVersionsInput {
    /// Marshals this input into an Operation<[`GetCampaignVersions`](crate::operation::GetCampaignVersions)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetCampaignVersions, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::GetCampaignVersions::new(),
            "GetCampaignVersions",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        let campaign_id = label(&self.campaign_id, "campaign_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/campaigns/{CampaignId}/versions",
            ApplicationId = application_id,
            CampaignId = campaign_id
        ));
        Ok(())
    }
    fn uri_query(&self, output: &mut std::string::String) {
        let mut query = smithy_http::query::Writer::new(output);
        query.push_optional("page-size", self.page_size.as_deref());
        query.push_optional("token", self.token.as_deref());
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        self.uri_query(&mut uri);
        Ok(builder.method("GET").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`GetCampaignVersionsInput`](crate::input::GetCampaignVersionsInput)
    pub fn builder() -> crate::input::get_campaign_versions_input::Builder {
        crate::input::get_campaign_versions_input::Builder::default()
    }
}

/// See [`GetCampaignsInput`](crate::input::GetCampaignsInput)
pub mod get_campaigns_input {
    /// A builder for [`GetCampaignsInput`](crate::input::GetCampaignsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) page_size: std::option::Option<std::string::String>,
        pub(crate) token: std::option::Option<std::string::String>,
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
        pub fn page_size(mut self, input: impl Into<std::string::String>) -> Self {
            self.page_size = Some(input.into());
            self
        }
        pub fn set_page_size(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        pub fn token(mut self, input: impl Into<std::string::String>) -> Self {
            self.token = Some(input.into());
            self
        }
        pub fn set_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCampaignsInput`](crate::input::GetCampaignsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetCampaignsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetCampaignsInput {
                application_id: self.application_id,
                page_size: self.page_size,
                token: self.token,
            })
        }
    }
}
impl GetCampaignsInput {
    /// Marshals this input into an Operation<[`GetCampaigns`](crate::operation::GetCampaigns)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetCampaigns, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::GetCampaigns::new(),
            "GetCampaigns",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/campaigns",
            ApplicationId = application_id
        ));
        Ok(())
    }
    fn uri_query(&self, output: &mut std::string::String) {
        let mut query = smithy_http::query::Writer::new(output);
        query.push_optional("page-size", self.page_size.as_deref());
        query.push_optional("token", self.token.as_deref());
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        self.uri_query(&mut uri);
        Ok(builder.method("GET").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`GetCampaignsInput`](crate::input::GetCampaignsInput)
    pub fn builder() -> crate::input::get_campaigns_input::Builder {
        crate::input::get_campaigns_input::Builder::default()
    }
}

/// See [`GetEndpointInput`](crate::input::GetEndpointInput)
pub mod get_endpoint_input {
    /// A builder for [`GetEndpointInput`](crate::input::GetEndpointInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) endpoint_id: std::option::Option<std::string::String>,
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
        pub fn endpoint_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_id = Some(input.into());
            self
        }
        pub fn set_endpoint_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_id = input;
            self
        }
        /// Consumes the builder and constructs a [`GetEndpointInput`](crate::input::GetEndpointInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetEndpointInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetEndpointInput {
                application_id: self.application_id,
                endpoint_id: self.endpoint_id,
            })
        }
    }
}
impl GetEndpointInput {
    /// Marshals this input into an Operation<[`GetEndpoint`](crate::operation::GetEndpoint)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetEndpoint, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::GetEndpoint::new(),
            "GetEndpoint",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        let endpoint_id = label(&self.endpoint_id, "endpoint_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/endpoints/{EndpointId}",
            ApplicationId = application_id,
            EndpointId = endpoint_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("GET").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`GetEndpointInput`](crate::input::GetEndpointInput)
    pub fn builder() -> crate::input::get_endpoint_input::Builder {
        crate::input::get_endpoint_input::Builder::default()
    }
}

/// See [`GetGcmChannelInput`](crate::input::GetGcmChannelInput)
pub mod get_gcm_channel_input {
    /// A builder for [`GetGcmChannelInput`](crate::input::GetGcmChannelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`GetGcmChannelInput`](crate::input::GetGcmChannelInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetGcmChannelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetGcmChannelInput {
                application_id: self.application_id,
            })
        }
    }
}
impl GetGcmChannelInput {
    /// Marshals this input into an Operation<[`GetGcmChannel`](crate::operation::GetGcmChannel)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetGcmChannel, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::GetGcmChannel::new(),
            "GetGcmChannel",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/channels/gcm",
            ApplicationId = application_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("GET").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`GetGcmChannelInput`](crate::input::GetGcmChannelInput)
    pub fn builder() -> crate::input::get_gcm_channel_input::Builder {
        crate::input::get_gcm_channel_input::Builder::default()
    }
}

/// See [`GetImportJobInput`](crate::input::GetImportJobInput)
pub mod get_import_job_input {
    /// A builder for [`GetImportJobInput`](crate::input::GetImportJobInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) job_id: std::option::Option<std::string::String>,
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
        pub fn job_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.job_id = Some(input.into());
            self
        }
        pub fn set_job_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.job_id = input;
            self
        }
        /// Consumes the builder and constructs a [`GetImportJobInput`](crate::input::GetImportJobInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetImportJobInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetImportJobInput {
                application_id: self.application_id,
                job_id: self.job_id,
            })
        }
    }
}
impl GetImportJobInput {
    /// Marshals this input into an Operation<[`GetImportJob`](crate::operation::GetImportJob)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetImportJob, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::GetImportJob::new(),
            "GetImportJob",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        let job_id = label(&self.job_id, "job_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/jobs/import/{JobId}",
            ApplicationId = application_id,
            JobId = job_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("GET").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`GetImportJobInput`](crate::input::GetImportJobInput)
    pub fn builder() -> crate::input::get_import_job_input::Builder {
        crate::input::get_import_job_input::Builder::default()
    }
}

/// See [`GetImportJobsInput`](crate::input::GetImportJobsInput)
pub mod get_import_jobs_input {
    /// A builder for [`GetImportJobsInput`](crate::input::GetImportJobsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) page_size: std::option::Option<std::string::String>,
        pub(crate) token: std::option::Option<std::string::String>,
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
        pub fn page_size(mut self, input: impl Into<std::string::String>) -> Self {
            self.page_size = Some(input.into());
            self
        }
        pub fn set_page_size(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        pub fn token(mut self, input: impl Into<std::string::String>) -> Self {
            self.token = Some(input.into());
            self
        }
        pub fn set_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// Consumes the builder and constructs a [`GetImportJobsInput`](crate::input::GetImportJobsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetImportJobsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetImportJobsInput {
                application_id: self.application_id,
                page_size: self.page_size,
                token: self.token,
            })
        }
    }
}
impl GetImportJobsInput {
    /// Marshals this input into an Operation<[`GetImportJobs`](crate::operation::GetImportJobs)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetImportJobs, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::GetImportJobs::new(),
            "GetImportJobs",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/jobs/import",
            ApplicationId = application_id
        ));
        Ok(())
    }
    fn uri_query(&self, output: &mut std::string::String) {
        let mut query = smithy_http::query::Writer::new(output);
        query.push_optional("page-size", self.page_size.as_deref());
        query.push_optional("token", self.token.as_deref());
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        self.uri_query(&mut uri);
        Ok(builder.method("GET").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`GetImportJobsInput`](crate::input::GetImportJobsInput)
    pub fn builder() -> crate::input::get_import_jobs_input::Builder {
        crate::input::get_import_jobs_input::Builder::default()
    }
}

/// See [`GetSegmentInput`](crate::input::GetSegmentInput)
pub mod get_segment_input {
    /// A builder for [`GetSegmentInput`](crate::input::GetSegmentInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) segment_id: std::option::Option<std::string::String>,
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
        pub fn segment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.segment_id = Some(input.into());
            self
        }
        pub fn set_segment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.segment_id = input;
            self
        }
        /// Consumes the builder and constructs a [`GetSegmentInput`](crate::input::GetSegmentInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetSegmentInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetSegmentInput {
                application_id: self.application_id,
                segment_id: self.segment_id,
            })
        }
    }
}
impl GetSegmentInput {
    /// Marshals this input into an Operation<[`GetSegment`](crate::operation::GetSegment)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetSegment, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::GetSegment::new(),
            "GetSegment",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        let segment_id = label(&self.segment_id, "segment_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/segments/{SegmentId}",
            ApplicationId = application_id,
            SegmentId = segment_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("GET").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`GetSegmentInput`](crate::input::GetSegmentInput)
    pub fn builder() -> crate::input::get_segment_input::Builder {
        crate::input::get_segment_input::Builder::default()
    }
}

/// See [`GetSegmentImportJobsInput`](crate::input::GetSegmentImportJobsInput)
pub mod get_segment_import_jobs_input {
    /// A builder for [`GetSegmentImportJobsInput`](crate::input::GetSegmentImportJobsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) segment_id: std::option::Option<std::string::String>,
        pub(crate) page_size: std::option::Option<std::string::String>,
        pub(crate) token: std::option::Option<std::string::String>,
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
        pub fn segment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.segment_id = Some(input.into());
            self
        }
        pub fn set_segment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.segment_id = input;
            self
        }
        pub fn page_size(mut self, input: impl Into<std::string::String>) -> Self {
            self.page_size = Some(input.into());
            self
        }
        pub fn set_page_size(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        pub fn token(mut self, input: impl Into<std::string::String>) -> Self {
            self.token = Some(input.into());
            self
        }
        pub fn set_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// Consumes the builder and constructs a [`GetSegmentImportJobsInput`](crate::input::GetSegmentImportJobsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetSegmentImportJobsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetSegmentImportJobsInput {
                application_id: self.application_id,
                segment_id: self.segment_id,
                page_size: self.page_size,
                token: self.token,
            })
        }
    }
}
impl GetSegmentImportJobsInput {
    /// Marshals this input into an Operation<[`GetSegmentImportJobs`](crate::operation::GetSegmentImportJobs)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetSegmentImportJobs, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::GetSegmentImportJobs::new(),
            "GetSegmentImportJobs",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        let segment_id = label(&self.segment_id, "segment_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/segments/{SegmentId}/jobs/import",
            ApplicationId = application_id,
            SegmentId = segment_id
        ));
        Ok(())
    }
    fn uri_query(&self, output: &mut std::string::String) {
        let mut query = smithy_http::query::Writer::new(output);
        query.push_optional("page-size", self.page_size.as_deref());
        query.push_optional("token", self.token.as_deref());
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        self.uri_query(&mut uri);
        Ok(builder.method("GET").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`GetSegmentImportJobsInput`](crate::input::GetSegmentImportJobsInput)
    pub fn builder() -> crate::input::get_segment_import_jobs_input::Builder {
        crate::input::get_segment_import_jobs_input::Builder::default()
    }
}

/// See [`GetSegmentVersionInput`](crate::input::GetSegmentVersionInput)
pub mod get_segment_version_input {
    /// A builder for [`GetSegmentVersionInput`](crate::input::GetSegmentVersionInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) segment_id: std::option::Option<std::string::String>,
        pub(crate) version: std::option::Option<std::string::String>,
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
        pub fn segment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.segment_id = Some(input.into());
            self
        }
        pub fn set_segment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.segment_id = input;
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
        /// Consumes the builder and constructs a [`GetSegmentVersionInput`](crate::input::GetSegmentVersionInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetSegmentVersionInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetSegmentVersionInput {
                application_id: self.application_id,
                segment_id: self.segment_id,
                version: self.version,
            })
        }
    }
}
impl GetSegmentVersionInput {
    /// Marshals this input into an Operation<[`GetSegmentVersion`](crate::operation::GetSegmentVersion)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetSegmentVersion, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::GetSegmentVersion::new(),
            "GetSegmentVersion",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        let segment_id = label(&self.segment_id, "segment_id")?;
        let version = label(&self.version, "version")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/segments/{SegmentId}/versions/{Version}",
            ApplicationId = application_id,
            SegmentId = segment_id,
            Version = version
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("GET").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`GetSegmentVersionInput`](crate::input::GetSegmentVersionInput)
    pub fn builder() -> crate::input::get_segment_version_input::Builder {
        crate::input::get_segment_version_input::Builder::default()
    }
}

/// See [`GetSegmentVersionsInput`](crate::input::GetSegmentVersionsInput)
pub mod get_segment_versions_input {
    /// A builder for [`GetSegmentVersionsInput`](crate::input::GetSegmentVersionsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) segment_id: std::option::Option<std::string::String>,
        pub(crate) page_size: std::option::Option<std::string::String>,
        pub(crate) token: std::option::Option<std::string::String>,
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
        pub fn segment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.segment_id = Some(input.into());
            self
        }
        pub fn set_segment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.segment_id = input;
            self
        }
        pub fn page_size(mut self, input: impl Into<std::string::String>) -> Self {
            self.page_size = Some(input.into());
            self
        }
        pub fn set_page_size(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        pub fn token(mut self, input: impl Into<std::string::String>) -> Self {
            self.token = Some(input.into());
            self
        }
        pub fn set_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// Consumes the builder and constructs a [`GetSegmentVersionsInput`](crate::input::GetSegmentVersionsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetSegmentVersionsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetSegmentVersionsInput {
                application_id: self.application_id,
                segment_id: self.segment_id,
                page_size: self.page_size,
                token: self.token,
            })
        }
    }
}
impl GetSegmentVersionsInput {
    /// Marshals this input into an Operation<[`GetSegmentVersions`](crate::operation::GetSegmentVersions)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetSegmentVersions, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::GetSegmentVersions::new(),
            "GetSegmentVersions",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        let segment_id = label(&self.segment_id, "segment_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/segments/{SegmentId}/versions",
            ApplicationId = application_id,
            SegmentId = segment_id
        ));
        Ok(())
    }
    fn uri_query(&self, output: &mut std::string::String) {
        let mut query = smithy_http::query::Writer::new(output);
        query.push_optional("page-size", self.page_size.as_deref());
        query.push_optional("token", self.token.as_deref());
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        self.uri_query(&mut uri);
        Ok(builder.method("GET").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`GetSegmentVersionsInput`](crate::input::GetSegmentVersionsInput)
    pub fn builder() -> crate::input::get_segment_versions_input::Builder {
        crate::input::get_segment_versions_input::Builder::default()
    }
}

/// See [`GetSegmentsInput`](crate::input::GetSegmentsInput)
pub mod get_segments_input {
    /// A builder for [`GetSegmentsInput`](crate::input::GetSegmentsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) page_size: std::option::Option<std::string::String>,
        pub(crate) token: std::option::Option<std::string::String>,
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
        pub fn page_size(mut self, input: impl Into<std::string::String>) -> Self {
            self.page_size = Some(input.into());
            self
        }
        pub fn set_page_size(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        pub fn token(mut self, input: impl Into<std::string::String>) -> Self {
            self.token = Some(input.into());
            self
        }
        pub fn set_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// Consumes the builder and constructs a [`GetSegmentsInput`](crate::input::GetSegmentsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetSegmentsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetSegmentsInput {
                application_id: self.application_id,
                page_size: self.page_size,
                token: self.token,
            })
        }
    }
}
impl GetSegmentsInput {
    /// Marshals this input into an Operation<[`GetSegments`](crate::operation::GetSegments)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetSegments, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::GetSegments::new(),
            "GetSegments",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/segments",
            ApplicationId = application_id
        ));
        Ok(())
    }
    fn uri_query(&self, output: &mut std::string::String) {
        let mut query = smithy_http::query::Writer::new(output);
        query.push_optional("page-size", self.page_size.as_deref());
        query.push_optional("token", self.token.as_deref());
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        self.uri_query(&mut uri);
        Ok(builder.method("GET").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`GetSegmentsInput`](crate::input::GetSegmentsInput)
    pub fn builder() -> crate::input::get_segments_input::Builder {
        crate::input::get_segments_input::Builder::default()
    }
}

/// See [`UpdateApnsChannelInput`](crate::input::UpdateApnsChannelInput)
pub mod update_apns_channel_input {
    /// A builder for [`UpdateApnsChannelInput`](crate::input::UpdateApnsChannelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) apns_channel_request: std::option::Option<crate::model::ApnsChannelRequest>,
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
        pub fn apns_channel_request(mut self, input: crate::model::ApnsChannelRequest) -> Self {
            self.apns_channel_request = Some(input);
            self
        }
        pub fn set_apns_channel_request(mut self, input: std::option::Option<crate::model::ApnsChannelRequest>) -> Self {
            self.apns_channel_request = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateApnsChannelInput`](crate::input::UpdateApnsChannelInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateApnsChannelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateApnsChannelInput {
                application_id: self.application_id,
                apns_channel_request: self.apns_channel_request,
            })
        }
    }
}
impl UpdateApnsChannelInput {
    /// Marshals this input into an Operation<[`UpdateApnsChannel`](crate::operation::UpdateApnsChannel)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateApnsChannel, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::from(self.build_body()?);
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::UpdateApnsChannel::new(),
            "UpdateApnsChannel",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/channels/apns",
            ApplicationId = application_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("PUT").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        let builder = builder.header("Content-Type", "application/json");
        self.update_http_builder(builder)
    }
    fn build_body(&self) -> std::result::Result<std::vec::Vec<u8>, smithy_http::operation::BuildError> {
        let payload = self.apns_channel_request.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "apns_channel_request",
                details: "the request payload is required",
            },
        )?;
        serde_json::to_vec(payload).map_err(smithy_http::operation::BuildError::serialization)
    }
    /// Creates a new builder-style object to manufacture [`UpdateApnsChannelInput`](crate::input::UpdateApnsChannelInput)
    pub fn builder() -> crate::input::update_apns_channel_input::Builder {
        crate::input::update_apns_channel_input::Builder::default()
    }
}

/// See [`UpdateApplicationSettingsInput`](crate::input::UpdateApplicationSettingsInput)
pub mod update_application_settings_input {
    /// A builder for [`UpdateApplicationSettingsInput`](crate::input::UpdateApplicationSettingsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) write_application_settings_request: std::option::Option<crate::model::WriteApplicationSettingsRequest>,
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
        pub fn write_application_settings_request(mut self, input: crate::model::WriteApplicationSettingsRequest) -> Self {
            self.write_application_settings_request = Some(input);
            self
        }
        pub fn set_write_application_settings_request(mut self, input: std::option::Option<crate::model::WriteApplicationSettingsRequest>) -> Self {
            self.write_application_settings_request = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateApplicationSettingsInput`](crate::input::UpdateApplicationSettingsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateApplicationSettingsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateApplicationSettingsInput {
                application_id: self.application_id,
                write_application_settings_request: self.write_application_settings_request,
            })
        }
    }
}
impl UpdateApplicationSettingsInput {
    /// Marshals this input into an Operation<[`UpdateApplicationSettings`](crate::operation::UpdateApplicationSettings)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateApplicationSettings, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::from(self.build_body()?);
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::UpdateApplicationSettings::new(),
            "UpdateApplicationSettings",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/settings",
            ApplicationId = application_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("PUT").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        let builder = builder.header("Content-Type", "application/json");
        self.update_http_builder(builder)
    }
    fn build_body(&self) -> std::result::Result<std::vec::Vec<u8>, smithy_http::operation::BuildError> {
        let payload = self.write_application_settings_request.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "write_application_settings_request",
                details: "the request payload is required",
            },
        )?;
        serde_json::to_vec(payload).map_err(smithy_http::operation::BuildError::serialization)
    }
    /// Creates a new builder-style object to manufacture [`UpdateApplicationSettingsInput`](crate::input::UpdateApplicationSettingsInput)
    pub fn builder() -> crate::input::update_application_settings_input::Builder {
        crate::input::update_application_settings_input::Builder::default()
    }
}

/// See [`UpdateCampaignInput`](crate::input::UpdateCampaignInput)
pub mod update_campaign_input {
    /// A builder for [`UpdateCampaignInput`](crate::input::UpdateCampaignInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) campaign_id: std::option::Option<std::string::String>,
        pub(crate) write_campaign_request: std::option::Option<crate::model::WriteCampaignRequest>,
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
        pub fn write_campaign_request(mut self, input: crate::model::WriteCampaignRequest) -> Self {
            self.write_campaign_request = Some(input);
            self
        }
        pub fn set_write_campaign_request(mut self, input: std::option::Option<crate::model::WriteCampaignRequest>) -> Self {
            self.write_campaign_request = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateCampaignInput`](crate::input::UpdateCampaignInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateCampaignInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateCampaignInput {
                application_id: self.application_id,
                campaign_id: self.campaign_id,
                write_campaign_request: self.write_campaign_request,
            })
        }
    }
}
impl UpdateCampaignInput {
    /// Marshals this input into an Operation<[`UpdateCampaign`](crate::operation::UpdateCampaign)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateCampaign, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::from(self.build_body()?);
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::UpdateCampaign::new(),
            "UpdateCampaign",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        let campaign_id = label(&self.campaign_id, "campaign_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/campaigns/{CampaignId}",
            ApplicationId = application_id,
            CampaignId = campaign_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("PUT").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        let builder = builder.header("Content-Type", "application/json");
        self.update_http_builder(builder)
    }
    fn build_body(&self) -> std::result::Result<std::vec::Vec<u8>, smithy_http::operation::BuildError> {
        let payload = self.write_campaign_request.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "write_campaign_request",
                details: "the request payload is required",
            },
        )?;
        serde_json::to_vec(payload).map_err(smithy_http::operation::BuildError::serialization)
    }
    /// Creates a new builder-style object to manufacture [`UpdateCampaignInput`](crate::input::UpdateCampaignInput)
    pub fn builder() -> crate::input::update_campaign_input::Builder {
        crate::input::update_campaign_input::Builder::default()
    }
}

/// See [`UpdateEndpointInput`](crate::input::UpdateEndpointInput)
pub mod update_endpoint_input {
    /// A builder for [`UpdateEndpointInput`](crate::input::UpdateEndpointInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) endpoint_id: std::option::Option<std::string::String>,
        pub(crate) endpoint_request: std::option::Option<crate::model::EndpointRequest>,
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
        pub fn endpoint_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_id = Some(input.into());
            self
        }
        pub fn set_endpoint_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_id = input;
            self
        }
        pub fn endpoint_request(mut self, input: crate::model::EndpointRequest) -> Self {
            self.endpoint_request = Some(input);
            self
        }
        pub fn set_endpoint_request(mut self, input: std::option::Option<crate::model::EndpointRequest>) -> Self {
            self.endpoint_request = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateEndpointInput`](crate::input::UpdateEndpointInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateEndpointInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateEndpointInput {
                application_id: self.application_id,
                endpoint_id: self.endpoint_id,
                endpoint_request: self.endpoint_request,
            })
        }
    }
}
impl UpdateEndpointInput {
    /// Marshals this input into an Operation<[`UpdateEndpoint`](crate::operation::UpdateEndpoint)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateEndpoint, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::from(self.build_body()?);
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::UpdateEndpoint::new(),
            "UpdateEndpoint",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        let endpoint_id = label(&self.endpoint_id, "endpoint_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/endpoints/{EndpointId}",
            ApplicationId = application_id,
            EndpointId = endpoint_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("PUT").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        let builder = builder.header("Content-Type", "application/json");
        self.update_http_builder(builder)
    }
    fn build_body(&self) -> std::result::Result<std::vec::Vec<u8>, smithy_http::operation::BuildError> {
        let payload = self.endpoint_request.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "endpoint_request",
                details: "the request payload is required",
            },
        )?;
        serde_json::to_vec(payload).map_err(smithy_http::operation::BuildError::serialization)
    }
    /// Creates a new builder-style object to manufacture [`UpdateEndpointInput`](crate::input::UpdateEndpointInput)
    pub fn builder() -> crate::input::update_endpoint_input::Builder {
        crate::input::update_endpoint_input::Builder::default()
    }
}

/// See [`UpdateEndpointsBatchInput`](crate::input::UpdateEndpointsBatchInput)
pub mod update_endpoints_batch_input {
    /// A builder for [`UpdateEndpointsBatchInput`](crate::input::UpdateEndpointsBatchInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) endpoint_batch_request: std::option::Option<crate::model::EndpointBatchRequest>,
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
        pub fn endpoint_batch_request(mut self, input: crate::model::EndpointBatchRequest) -> Self {
            self.endpoint_batch_request = Some(input);
            self
        }
        pub fn set_endpoint_batch_request(mut self, input: std::option::Option<crate::model::EndpointBatchRequest>) -> Self {
            self.endpoint_batch_request = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateEndpointsBatchInput`](crate::input::UpdateEndpointsBatchInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateEndpointsBatchInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateEndpointsBatchInput {
                application_id: self.application_id,
                endpoint_batch_request: self.endpoint_batch_request,
            })
        }
    }
}
impl UpdateEndpointsBatchInput {
    /// Marshals this input into an Operation<[`UpdateEndpointsBatch`](crate::operation::UpdateEndpointsBatch)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateEndpointsBatch, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::from(self.build_body()?);
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::UpdateEndpointsBatch::new(),
            "UpdateEndpointsBatch",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/endpoints",
            ApplicationId = application_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("PUT").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        let builder = builder.header("Content-Type", "application/json");
        self.update_http_builder(builder)
    }
    fn build_body(&self) -> std::result::Result<std::vec::Vec<u8>, smithy_http::operation::BuildError> {
        let payload = self.endpoint_batch_request.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "endpoint_batch_request",
                details: "the request payload is required",
            },
        )?;
        serde_json::to_vec(payload).map_err(smithy_http::operation::BuildError::serialization)
    }
    /// Creates a new builder-style object to manufacture [`UpdateEndpointsBatchInput`](crate::input::UpdateEndpointsBatchInput)
    pub fn builder() -> crate::input::update_endpoints_batch_input::Builder {
        crate::input::update_endpoints_batch_input::Builder::default()
    }
}

/// See [`UpdateGcmChannelInput`](crate::input::UpdateGcmChannelInput)
pub mod update_gcm_channel_input {
    /// A builder for [`UpdateGcmChannelInput`](crate::input::UpdateGcmChannelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) gcm_channel_request: std::option::Option<crate::model::GcmChannelRequest>,
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
        pub fn gcm_channel_request(mut self, input: crate::model::GcmChannelRequest) -> Self {
            self.gcm_channel_request = Some(input);
            self
        }
        pub fn set_gcm_channel_request(mut self, input: std::option::Option<crate::model::GcmChannelRequest>) -> Self {
            self.gcm_channel_request = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateGcmChannelInput`](crate::input::UpdateGcmChannelInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateGcmChannelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateGcmChannelInput {
                application_id: self.application_id,
                gcm_channel_request: self.gcm_channel_request,
            })
        }
    }
}
impl UpdateGcmChannelInput {
    /// Marshals this input into an Operation<[`UpdateGcmChannel`](crate::operation::UpdateGcmChannel)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateGcmChannel, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::from(self.build_body()?);
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::UpdateGcmChannel::new(),
            "UpdateGcmChannel",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/channels/gcm",
            ApplicationId = application_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("PUT").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        let builder = builder.header("Content-Type", "application/json");
        self.update_http_builder(builder)
    }
    fn build_body(&self) -> std::result::Result<std::vec::Vec<u8>, smithy_http::operation::BuildError> {
        let payload = self.gcm_channel_request.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "gcm_channel_request",
                details: "the request payload is required",
            },
        )?;
        serde_json::to_vec(payload).map_err(smithy_http::operation::BuildError::serialization)
    }
    /// Creates a new builder-style object to manufacture [`UpdateGcmChannelInput`](crate::input::UpdateGcmChannelInput)
    pub fn builder() -> crate::input::update_gcm_channel_input::Builder {
        crate::input::update_gcm_channel_input::Builder::default()
    }
}

/// See [`UpdateSegmentInput`](crate::input::UpdateSegmentInput)
pub mod update_segment_input {
    /// A builder for [`UpdateSegmentInput`](crate::input::UpdateSegmentInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) segment_id: std::option::Option<std::string::String>,
        pub(crate) write_segment_request: std::option::Option<crate::model::WriteSegmentRequest>,
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
        pub fn segment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.segment_id = Some(input.into());
            self
        }
        pub fn set_segment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.segment_id = input;
            self
        }
        pub fn write_segment_request(mut self, input: crate::model::WriteSegmentRequest) -> Self {
            self.write_segment_request = Some(input);
            self
        }
        pub fn set_write_segment_request(mut self, input: std::option::Option<crate::model::WriteSegmentRequest>) -> Self {
            self.write_segment_request = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateSegmentInput`](crate::input::UpdateSegmentInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateSegmentInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateSegmentInput {
                application_id: self.application_id,
                segment_id: self.segment_id,
                write_segment_request: self.write_segment_request,
            })
        }
    }
}
impl UpdateSegmentInput {
    /// Marshals this input into an Operation<[`UpdateSegment`](crate::operation::UpdateSegment)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateSegment, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::from(self.build_body()?);
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::UpdateSegment::new(),
            "UpdateSegment",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        let segment_id = label(&self.segment_id, "segment_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/segments/{SegmentId}",
            ApplicationId = application_id,
            SegmentId = segment_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("PUT").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        let builder = builder.header("Content-Type", "application/json");
        self.update_http_builder(builder)
    }
    fn build_body(&self) -> std::result::Result<std::vec::Vec<u8>, smithy_http::operation::BuildError> {
        let payload = self.write_segment_request.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "write_segment_request",
                details: "the request payload is required",
            },
        )?;
        serde_json::to_vec(payload).map_err(smithy_http::operation::BuildError::serialization)
    }
    /// Creates a new builder-style object to manufacture [`UpdateSegmentInput`](crate::input::UpdateSegmentInput)
    pub fn builder() -> crate::input::update_segment_input::Builder {
        crate::input::update_segment_input::Builder::default()
    }
}

/// See [`SendMessagesInput`](crate::input::SendMessagesInput)
pub mod send_messages_input {
    /// A builder for [`SendMessagesInput`](crate::input::SendMessagesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) message_request: std::option::Option<crate::model::MessageRequest>,
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
        pub fn message_request(mut self, input: crate::model::MessageRequest) -> Self {
            self.message_request = Some(input);
            self
        }
        pub fn set_message_request(mut self, input: std::option::Option<crate::model::MessageRequest>) -> Self {
            self.message_request = input;
            self
        }
        /// Consumes the builder and constructs a [`SendMessagesInput`](crate::input::SendMessagesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::SendMessagesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::SendMessagesInput {
                application_id: self.application_id,
                message_request: self.message_request,
            })
        }
    }
}
impl SendMessagesInput {
    /// Marshals this input into an Operation<[`SendMessages`](crate::operation::SendMessages)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::SendMessages, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::from(self.build_body()?);
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::SendMessages::new(),
            "SendMessages",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/messages",
            ApplicationId = application_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("POST").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        let builder = builder.header("Content-Type", "application/json");
        self.update_http_builder(builder)
    }
    fn build_body(&self) -> std::result::Result<std::vec::Vec<u8>, smithy_http::operation::BuildError> {
        let payload = self.message_request.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "message_request",
                details: "the request payload is required",
            },
        )?;
        serde_json::to_vec(payload).map_err(smithy_http::operation::BuildError::serialization)
    }
    /// Creates a new builder-style object to manufacture [`SendMessagesInput`](crate::input::SendMessagesInput)
    pub fn builder() -> crate::input::send_messages_input::Builder {
        crate::input::send_messages_input::Builder::default()
    }
}

/// See [`CreateJourneyInput`](crate::input::CreateJourneyInput)
pub mod create_journey_input {
    /// A builder for [`CreateJourneyInput`](crate::input::CreateJourneyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) write_journey_request: std::option::Option<crate::model::WriteJourneyRequest>,
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
        pub fn write_journey_request(mut self, input: crate::model::WriteJourneyRequest) -> Self {
            self.write_journey_request = Some(input);
            self
        }
        pub fn set_write_journey_request(mut self, input: std::option::Option<crate::model::WriteJourneyRequest>) -> Self {
            self.write_journey_request = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateJourneyInput`](crate::input::CreateJourneyInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateJourneyInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateJourneyInput {
                application_id: self.application_id,
                write_journey_request: self.write_journey_request,
            })
        }
    }
}
impl CreateJourneyInput {
    /// Marshals this input into an Operation<[`CreateJourney`](crate::operation::CreateJourney)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateJourney, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::from(self.build_body()?);
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::CreateJourney::new(),
            "CreateJourney",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/journeys",
            ApplicationId = application_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("POST").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        let builder = builder.header("Content-Type", "application/json");
        self.update_http_builder(builder)
    }
    fn build_body(&self) -> std::result::Result<std::vec::Vec<u8>, smithy_http::operation::BuildError> {
        let payload = self.write_journey_request.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "write_journey_request",
                details: "the request payload is required",
            },
        )?;
        serde_json::to_vec(payload).map_err(smithy_http::operation::BuildError::serialization)
    }
    /// Creates a new builder-style object to manufacture [`CreateJourneyInput`](crate::input::CreateJourneyInput)
    pub fn builder() -> crate::input::create_journey_input::Builder {
        crate::input::create_journey_input::Builder::default()
    }
}

/// See [`GetJourneyInput`](crate::input::GetJourneyInput)
pub mod get_journey_input {
    /// A builder for [`GetJourneyInput`](crate::input::GetJourneyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) journey_id: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`GetJourneyInput`](crate::input::GetJourneyInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetJourneyInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetJourneyInput {
                application_id: self.application_id,
                journey_id: self.journey_id,
            })
        }
    }
}
impl GetJourneyInput {
    /// Marshals this input into an Operation<[`GetJourney`](crate::operation::GetJourney)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetJourney, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::GetJourney::new(),
            "GetJourney",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        let journey_id = label(&self.journey_id, "journey_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/journeys/{JourneyId}",
            ApplicationId = application_id,
            JourneyId = journey_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("GET").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`GetJourneyInput`](crate::input::GetJourneyInput)
    pub fn builder() -> crate::input::get_journey_input::Builder {
        crate::input::get_journey_input::Builder::default()
    }
}

/// See [`UpdateJourneyInput`](crate::input::UpdateJourneyInput)
pub mod update_journey_input {
    /// A builder for [`UpdateJourneyInput`](crate::input::UpdateJourneyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) journey_id: std::option::Option<std::string::String>,
        pub(crate) write_journey_request: std::option::Option<crate::model::WriteJourneyRequest>,
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
        pub fn write_journey_request(mut self, input: crate::model::WriteJourneyRequest) -> Self {
            self.write_journey_request = Some(input);
            self
        }
        pub fn set_write_journey_request(mut self, input: std::option::Option<crate::model::WriteJourneyRequest>) -> Self {
            self.write_journey_request = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateJourneyInput`](crate::input::UpdateJourneyInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateJourneyInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateJourneyInput {
                application_id: self.application_id,
                journey_id: self.journey_id,
                write_journey_request: self.write_journey_request,
            })
        }
    }
}
impl UpdateJourneyInput {
    /// Marshals this input into an Operation<[`UpdateJourney`](crate::operation::UpdateJourney)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateJourney, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::from(self.build_body()?);
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::UpdateJourney::new(),
            "UpdateJourney",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        let journey_id = label(&self.journey_id, "journey_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/journeys/{JourneyId}",
            ApplicationId = application_id,
            JourneyId = journey_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("PUT").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        let builder = builder.header("Content-Type", "application/json");
        self.update_http_builder(builder)
    }
    fn build_body(&self) -> std::result::Result<std::vec::Vec<u8>, smithy_http::operation::BuildError> {
        let payload = self.write_journey_request.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "write_journey_request",
                details: "the request payload is required",
            },
        )?;
        serde_json::to_vec(payload).map_err(smithy_http::operation::BuildError::serialization)
    }
    /// Creates a new builder-style object to manufacture [`UpdateJourneyInput`](crate::input::UpdateJourneyInput)
    pub fn builder() -> crate::input::update_journey_input::Builder {
        crate::input::update_journey_input::Builder::default()
    }
}

/// See [`DeleteJourneyInput`](crate::input::DeleteJourneyInput)
pub mod delete_journey_input {
    /// A builder for [`DeleteJourneyInput`](crate::input::DeleteJourneyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) journey_id: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DeleteJourneyInput`](crate::input::DeleteJourneyInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteJourneyInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteJourneyInput {
                application_id: self.application_id,
                journey_id: self.journey_id,
            })
        }
    }
}
impl DeleteJourneyInput {
    /// Marshals this input into an Operation<[`DeleteJourney`](crate::operation::DeleteJourney)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteJourney, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::DeleteJourney::new(),
            "DeleteJourney",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        let journey_id = label(&self.journey_id, "journey_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/journeys/{JourneyId}",
            ApplicationId = application_id,
            JourneyId = journey_id
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("DELETE").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`DeleteJourneyInput`](crate::input::DeleteJourneyInput)
    pub fn builder() -> crate::input::delete_journey_input::Builder {
        crate::input::delete_journey_input::Builder::default()
    }
}

/// See [`ListJourneysInput`](crate::input::ListJourneysInput)
pub mod list_journeys_input {
    /// A builder for [`ListJourneysInput`](crate::input::ListJourneysInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) page_size: std::option::Option<std::string::String>,
        pub(crate) token: std::option::Option<std::string::String>,
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
        pub fn page_size(mut self, input: impl Into<std::string::String>) -> Self {
            self.page_size = Some(input.into());
            self
        }
        pub fn set_page_size(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        pub fn token(mut self, input: impl Into<std::string::String>) -> Self {
            self.token = Some(input.into());
            self
        }
        pub fn set_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListJourneysInput`](crate::input::ListJourneysInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListJourneysInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListJourneysInput {
                application_id: self.application_id,
                page_size: self.page_size,
                token: self.token,
            })
        }
    }
}
impl ListJourneysInput {
    /// Marshals this input into an Operation<[`ListJourneys`](crate::operation::ListJourneys)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListJourneys, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::ListJourneys::new(),
            "ListJourneys",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/journeys",
            ApplicationId = application_id
        ));
        Ok(())
    }
    fn uri_query(&self, output: &mut std::string::String) {
        let mut query = smithy_http::query::Writer::new(output);
        query.push_optional("page-size", self.page_size.as_deref());
        query.push_optional("token", self.token.as_deref());
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        self.uri_query(&mut uri);
        Ok(builder.method("GET").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`ListJourneysInput`](crate::input::ListJourneysInput)
    pub fn builder() -> crate::input::list_journeys_input::Builder {
        crate::input::list_journeys_input::Builder::default()
    }
}

/// See [`GetJourneyExecutionMetricsInput`](crate::input::GetJourneyExecutionMetricsInput)
pub mod get_journey_execution_metrics_input {
    /// A builder for [`GetJourneyExecutionMetricsInput`](crate::input::GetJourneyExecutionMetricsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) journey_id: std::option::Option<std::string::String>,
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) page_size: std::option::Option<std::string::String>,
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
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        pub fn page_size(mut self, input: impl Into<std::string::String>) -> Self {
            self.page_size = Some(input.into());
            self
        }
        pub fn set_page_size(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        /// Consumes the builder and constructs a [`GetJourneyExecutionMetricsInput`](crate::input::GetJourneyExecutionMetricsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetJourneyExecutionMetricsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetJourneyExecutionMetricsInput {
                application_id: self.application_id,
                journey_id: self.journey_id,
                next_token: self.next_token,
                page_size: self.page_size,
            })
        }
    }
}
impl GetJourneyExecutionMetricsInput {
    /// Marshals this input into an Operation<[`GetJourneyExecutionMetrics`](crate::operation::GetJourneyExecutionMetrics)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetJourneyExecutionMetrics, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::GetJourneyExecutionMetrics::new(),
            "GetJourneyExecutionMetrics",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let application_id = label(&self.application_id, "application_id")?;
        let journey_id = label(&self.journey_id, "journey_id")?;
        output.push_str(&format!(
            "/v1/apps/{ApplicationId}/journeys/{JourneyId}/execution-metrics",
            ApplicationId = application_id,
            JourneyId = journey_id
        ));
        Ok(())
    }
    fn uri_query(&self, output: &mut std::string::String) {
        let mut query = smithy_http::query::Writer::new(output);
        query.push_optional("next-token", self.next_token.as_deref());
        query.push_optional("page-size", self.page_size.as_deref());
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        self.uri_query(&mut uri);
        Ok(builder.method("GET").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`GetJourneyExecutionMetricsInput`](crate::input::GetJourneyExecutionMetricsInput)
    pub fn builder() -> crate::input::get_journey_execution_metrics_input::Builder {
        crate::input::get_journey_execution_metrics_input::Builder::default()
    }
}

/// See [`CreateEmailTemplateInput`](crate::input::CreateEmailTemplateInput)
pub mod create_email_template_input {
    /// A builder for [`CreateEmailTemplateInput`](crate::input::CreateEmailTemplateInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) template_name: std::option::Option<std::string::String>,
        pub(crate) email_template_request: std::option::Option<crate::model::EmailTemplateRequest>,
    }
    impl Builder {
        pub fn template_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.template_name = Some(input.into());
            self
        }
        pub fn set_template_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.template_name = input;
            self
        }
        pub fn email_template_request(mut self, input: crate::model::EmailTemplateRequest) -> Self {
            self.email_template_request = Some(input);
            self
        }
        pub fn set_email_template_request(mut self, input: std::option::Option<crate::model::EmailTemplateRequest>) -> Self {
            self.email_template_request = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateEmailTemplateInput`](crate::input::CreateEmailTemplateInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateEmailTemplateInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateEmailTemplateInput {
                template_name: self.template_name,
                email_template_request: self.email_template_request,
            })
        }
    }
}
impl CreateEmailTemplateInput {
    /// Marshals this input into an Operation<[`CreateEmailTemplate`](crate::operation::CreateEmailTemplate)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateEmailTemplate, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::from(self.build_body()?);
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::CreateEmailTemplate::new(),
            "CreateEmailTemplate",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let template_name = label(&self.template_name, "template_name")?;
        output.push_str(&format!(
            "/v1/templates/{TemplateName}/email",
            TemplateName = template_name
        ));
        Ok(())
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        Ok(builder.method("POST").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        let builder = builder.header("Content-Type", "application/json");
        self.update_http_builder(builder)
    }
    fn build_body(&self) -> std::result::Result<std::vec::Vec<u8>, smithy_http::operation::BuildError> {
        let payload = self.email_template_request.as_ref().ok_or(
            smithy_http::operation::BuildError::MissingField {
                field: "email_template_request",
                details: "the request payload is required",
            },
        )?;
        serde_json::to_vec(payload).map_err(smithy_http::operation::BuildError::serialization)
    }
    /// Creates a new builder-style object to manufacture [`CreateEmailTemplateInput`](crate::input::CreateEmailTemplateInput)
    pub fn builder() -> crate::input::create_email_template_input::Builder {
        crate::input::create_email_template_input::Builder::default()
    }
}

/// See [`GetEmailTemplateInput`](crate::input::GetEmailTemplateInput)
pub mod get_email_template_input {
    /// A builder for [`GetEmailTemplateInput`](crate::input::GetEmailTemplateInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) template_name: std::option::Option<std::string::String>,
        pub(crate) version: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn template_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.template_name = Some(input.into());
            self
        }
        pub fn set_template_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.template_name = input;
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
        /// Consumes the builder and constructs a [`GetEmailTemplateInput`](crate::input::GetEmailTemplateInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetEmailTemplateInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetEmailTemplateInput {
                template_name: self.template_name,
                version: self.version,
            })
        }
    }
}
impl GetEmailTemplateInput {
    /// Marshals this input into an Operation<[`GetEmailTemplate`](crate::operation::GetEmailTemplate)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetEmailTemplate, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::GetEmailTemplate::new(),
            "GetEmailTemplate",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let template_name = label(&self.template_name, "template_name")?;
        output.push_str(&format!(
            "/v1/templates/{TemplateName}/email",
            TemplateName = template_name
        ));
        Ok(())
    }
    fn uri_query(&self, output: &mut std::string::String) {
        let mut query = smithy_http::query::Writer::new(output);
        query.push_optional("version", self.version.as_deref());
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        self.uri_query(&mut uri);
        Ok(builder.method("GET").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`GetEmailTemplateInput`](crate::input::GetEmailTemplateInput)
    pub fn builder() -> crate::input::get_email_template_input::Builder {
        crate::input::get_email_template_input::Builder::default()
    }
}

/// See [`ListTemplatesInput`](crate::input::ListTemplatesInput)
pub mod list_templates_input {
    /// A builder for [`ListTemplatesInput`](crate::input::ListTemplatesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) page_size: std::option::Option<std::string::String>,
        pub(crate) prefix: std::option::Option<std::string::String>,
        pub(crate) template_type: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        pub fn page_size(mut self, input: impl Into<std::string::String>) -> Self {
            self.page_size = Some(input.into());
            self
        }
        pub fn set_page_size(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        pub fn prefix(mut self, input: impl Into<std::string::String>) -> Self {
            self.prefix = Some(input.into());
            self
        }
        pub fn set_prefix(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.prefix = input;
            self
        }
        pub fn template_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.template_type = Some(input.into());
            self
        }
        pub fn set_template_type(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.template_type = input;
            self
        }
        /// Consumes the builder and constructs a [`ListTemplatesInput`](crate::input::ListTemplatesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListTemplatesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListTemplatesInput {
                next_token: self.next_token,
                page_size: self.page_size,
                prefix: self.prefix,
                template_type: self.template_type,
            })
        }
    }
}
impl ListTemplatesInput {
    /// Marshals this input into an Operation<[`ListTemplates`](crate::operation::ListTemplates)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListTemplates, ()>,
        smithy_http::operation::BuildError,
    > {
        let body = smithy_http::body::SdkBody::empty();
        let request = assemble(self.request_builder_base()?, body)?;
        Ok(finalize_operation(
            request,
            crate::operation::ListTemplates::new(),
            "ListTemplates",
            config,
        ))
    }
    fn uri_base(
        &self,
        output: &mut std::string::String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        output.push_str("/v1/templates");
        Ok(())
    }
    fn uri_query(&self, output: &mut std::string::String) {
        let mut query = smithy_http::query::Writer::new(output);
        query.push_optional("next-token", self.next_token.as_deref());
        query.push_optional("page-size", self.page_size.as_deref());
        query.push_optional("prefix", self.prefix.as_deref());
        query.push_optional("template-type", self.template_type.as_deref());
    }
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = std::string::String::new();
        self.uri_base(&mut uri)?;
        self.uri_query(&mut uri);
        Ok(builder.method("GET").uri(uri))
    }
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let builder = http::request::Builder::new();
        self.update_http_builder(builder)
    }
    /// Creates a new builder-style object to manufacture [`ListTemplatesInput`](crate::input::ListTemplatesInput)
    pub fn builder() -> crate::input::list_templates_input::Builder {
        crate::input::list_templates_input::Builder::default()
    }
}

fn label(
    value: &std::option::Option<std::string::String>,
    field: &'static str,
) -> std::result::Result<std::string::String, smithy_http::operation::BuildError> {
    let formatted = value
        .as_deref()
        .map(|value| smithy_http::label::fmt_string(value, false))
        .unwrap_or_default();
    if formatted.is_empty() {
        return Err(smithy_http::operation::BuildError::MissingField {
            field,
            details: "cannot be empty or unset",
        });
    }
    Ok(formatted)
}

fn assemble(
    mut builder: http::request::Builder,
    body: smithy_http::body::SdkBody,
) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
    if let Some(content_length) = body.content_length().filter(|len| *len > 0) {
        builder = builder.header(http::header::CONTENT_LENGTH, content_length.to_string());
    }
    Ok(builder.body(body)?)
}

fn finalize_operation<O>(
    request: http::Request<smithy_http::body::SdkBody>,
    handler: O,
    name: &'static str,
    config: &crate::config::Config,
) -> smithy_http::operation::Operation<O, ()> {
    tracing::debug!(
        operation = name,
        method = %request.method(),
        uri = %request.uri(),
        "constructed request"
    );
    let mut request = smithy_http::operation::Request::new(request);
    {
        let mut props = request.properties_mut();
        if let Some(region) = config.region() {
            props.insert(region.clone());
        }
        aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
        props.insert(aws_types::SigningService::from_static(
            config.signing_service(),
        ));
    }
    smithy_http::operation::Operation::new(request, handler).with_metadata(
        smithy_http::operation::Metadata::new(name, crate::config::SERVICE_NAME),
    )
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateCampaignInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    pub write_campaign_request: std::option::Option<crate::model::WriteCampaignRequest>,
}
impl CreateCampaignInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn write_campaign_request(&self) -> std::option::Option<&crate::model::WriteCampaignRequest> {
        self.write_campaign_request.as_ref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateImportJobInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    pub import_job_request: std::option::Option<crate::model::ImportJobRequest>,
}
impl CreateImportJobInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn import_job_request(&self) -> std::option::Option<&crate::model::ImportJobRequest> {
        self.import_job_request.as_ref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateSegmentInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    pub write_segment_request: std::option::Option<crate::model::WriteSegmentRequest>,
}
impl CreateSegmentInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn write_segment_request(&self) -> std::option::Option<&crate::model::WriteSegmentRequest> {
        self.write_segment_request.as_ref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteApnsChannelInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
}
impl DeleteApnsChannelInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteCampaignInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    /// The unique identifier for the campaign.
    pub campaign_id: std::option::Option<std::string::String>,
}
impl DeleteCampaignInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn campaign_id(&self) -> std::option::Option<&str> {
        self.campaign_id.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteGcmChannelInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
}
impl DeleteGcmChannelInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteSegmentInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    /// The unique identifier for the segment.
    pub segment_id: std::option::Option<std::string::String>,
}
impl DeleteSegmentInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn segment_id(&self) -> std::option::Option<&str> {
        self.segment_id.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetApnsChannelInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
}
impl GetApnsChannelInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetApplicationSettingsInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
}
impl GetApplicationSettingsInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetCampaignInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    /// The unique identifier for the campaign.
    pub campaign_id: std::option::Option<std::string::String>,
}
impl GetCampaignInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn campaign_id(&self) -> std::option::Option<&str> {
        self.campaign_id.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetCampaignActivitiesInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    /// The unique identifier for the campaign.
    pub campaign_id: std::option::Option<std::string::String>,
    /// The maximum number of items to include in each page of a paginated response.
    pub page_size: std::option::Option<std::string::String>,
    /// The NextToken string that specifies which page of results to return in a paginated response.
    pub token: std::option::Option<std::string::String>,
}
impl GetCampaignActivitiesInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn campaign_id(&self) -> std::option::Option<&str> {
        self.campaign_id.as_deref()
    }
    pub fn page_size(&self) -> std::option::Option<&str> {
        self.page_size.as_deref()
    }
    pub fn token(&self) -> std::option::Option<&str> {
        self.token.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetCampaignVersionInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    /// The unique identifier for the campaign.
    pub campaign_id: std::option::Option<std::string::String>,
    pub version: std::option::Option<std::string::String>,
}
impl GetCampaignVersionInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn campaign_id(&self) -> std::option::Option<&str> {
        self.campaign_id.as_deref()
    }
    pub fn version(&self) -> std::option::Option<&str> {
        self.version.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetCampaignVersionsInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    /// The unique identifier for the campaign.
    pub campaign_id: std::option::Option<std::string::String>,
    /// The maximum number of items to include in each page of a paginated response.
    pub page_size: std::option::Option<std::string::String>,
    /// The NextToken string that specifies which page of results to return in a paginated response.
    pub token: std::option::Option<std::string::String>,
}
impl GetCampaignVersionsInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn campaign_id(&self) -> std::option::Option<&str> {
        self.campaign_id.as_deref()
    }
    pub fn page_size(&self) -> std::option::Option<&str> {
        self.page_size.as_deref()
    }
    pub fn token(&self) -> std::option::Option<&str> {
        self.token.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetCampaignsInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    /// The maximum number of items to include in each page of a paginated response.
    pub page_size: std::option::Option<std::string::String>,
    /// The NextToken string that specifies which page of results to return in a paginated response.
    pub token: std::option::Option<std::string::String>,
}
impl GetCampaignsInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn page_size(&self) -> std::option::Option<&str> {
        self.page_size.as_deref()
    }
    pub fn token(&self) -> std::option::Option<&str> {
        self.token.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetEndpointInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    /// The unique identifier for the endpoint.
    pub endpoint_id: std::option::Option<std::string::String>,
}
impl GetEndpointInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn endpoint_id(&self) -> std::option::Option<&str> {
        self.endpoint_id.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetGcmChannelInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
}
impl GetGcmChannelInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetImportJobInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    /// The unique identifier for the job.
    pub job_id: std::option::Option<std::string::String>,
}
impl GetImportJobInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn job_id(&self) -> std::option::Option<&str> {
        self.job_id.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetImportJobsInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    /// The maximum number of items to include in each page of a paginated response.
    pub page_size: std::option::Option<std::string::String>,
    /// The NextToken string that specifies which page of results to return in a paginated response.
    pub token: std::option::Option<std::string::String>,
}
impl GetImportJobsInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn page_size(&self) -> std::option::Option<&str> {
        self.page_size.as_deref()
    }
    pub fn token(&self) -> std::option::Option<&str> {
        self.token.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetSegmentInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    /// The unique identifier for the segment.
    pub segment_id: std::option::Option<std::string::String>,
}
impl GetSegmentInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn segment_id(&self) -> std::option::Option<&str> {
        self.segment_id.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetSegmentImportJobsInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    /// The unique identifier for the segment.
    pub segment_id: std::option::Option<std::string::String>,
    /// The maximum number of items to include in each page of a paginated response.
    pub page_size: std::option::Option<std::string::String>,
    /// The NextToken string that specifies which page of results to return in a paginated response.
    pub token: std::option::Option<std::string::String>,
}
impl GetSegmentImportJobsInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn segment_id(&self) -> std::option::Option<&str> {
        self.segment_id.as_deref()
    }
    pub fn page_size(&self) -> std::option::Option<&str> {
        self.page_size.as_deref()
    }
    pub fn token(&self) -> std::option::Option<&str> {
        self.token.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetSegmentVersionInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    /// The unique identifier for the segment.
    pub segment_id: std::option::Option<std::string::String>,
    pub version: std::option::Option<std::string::String>,
}
impl GetSegmentVersionInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn segment_id(&self) -> std::option::Option<&str> {
        self.segment_id.as_deref()
    }
    pub fn version(&self) -> std::option::Option<&str> {
        self.version.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetSegmentVersionsInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    /// The unique identifier for the segment.
    pub segment_id: std::option::Option<std::string::String>,
    /// The maximum number of items to include in each page of a paginated response.
    pub page_size: std::option::Option<std::string::String>,
    /// The NextToken string that specifies which page of results to return in a paginated response.
    pub token: std::option::Option<std::string::String>,
}
impl GetSegmentVersionsInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn segment_id(&self) -> std::option::Option<&str> {
        self.segment_id.as_deref()
    }
    pub fn page_size(&self) -> std::option::Option<&str> {
        self.page_size.as_deref()
    }
    pub fn token(&self) -> std::option::Option<&str> {
        self.token.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetSegmentsInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    /// The maximum number of items to include in each page of a paginated response.
    pub page_size: std::option::Option<std::string::String>,
    /// The NextToken string that specifies which page of results to return in a paginated response.
    pub token: std::option::Option<std::string::String>,
}
impl GetSegmentsInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn page_size(&self) -> std::option::Option<&str> {
        self.page_size.as_deref()
    }
    pub fn token(&self) -> std::option::Option<&str> {
        self.token.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateApnsChannelInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    pub apns_channel_request: std::option::Option<crate::model::ApnsChannelRequest>,
}
impl UpdateApnsChannelInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn apns_channel_request(&self) -> std::option::Option<&crate::model::ApnsChannelRequest> {
        self.apns_channel_request.as_ref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateApplicationSettingsInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    pub write_application_settings_request: std::option::Option<crate::model::WriteApplicationSettingsRequest>,
}
impl UpdateApplicationSettingsInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn write_application_settings_request(&self) -> std::option::Option<&crate::model::WriteApplicationSettingsRequest> {
        self.write_application_settings_request.as_ref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateCampaignInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    /// The unique identifier for the campaign.
    pub campaign_id: std::option::Option<std::string::String>,
    pub write_campaign_request: std::option::Option<crate::model::WriteCampaignRequest>,
}
impl UpdateCampaignInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn campaign_id(&self) -> std::option::Option<&str> {
        self.campaign_id.as_deref()
    }
    pub fn write_campaign_request(&self) -> std::option::Option<&crate::model::WriteCampaignRequest> {
        self.write_campaign_request.as_ref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateEndpointInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    /// The unique identifier for the endpoint.
    pub endpoint_id: std::option::Option<std::string::String>,
    pub endpoint_request: std::option::Option<crate::model::EndpointRequest>,
}
impl UpdateEndpointInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn endpoint_id(&self) -> std::option::Option<&str> {
        self.endpoint_id.as_deref()
    }
    pub fn endpoint_request(&self) -> std::option::Option<&crate::model::EndpointRequest> {
        self.endpoint_request.as_ref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateEndpointsBatchInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    pub endpoint_batch_request: std::option::Option<crate::model::EndpointBatchRequest>,
}
impl UpdateEndpointsBatchInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn endpoint_batch_request(&self) -> std::option::Option<&crate::model::EndpointBatchRequest> {
        self.endpoint_batch_request.as_ref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateGcmChannelInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    pub gcm_channel_request: std::option::Option<crate::model::GcmChannelRequest>,
}
impl UpdateGcmChannelInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn gcm_channel_request(&self) -> std::option::Option<&crate::model::GcmChannelRequest> {
        self.gcm_channel_request.as_ref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateSegmentInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    /// The unique identifier for the segment.
    pub segment_id: std::option::Option<std::string::String>,
    pub write_segment_request: std::option::Option<crate::model::WriteSegmentRequest>,
}
impl UpdateSegmentInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn segment_id(&self) -> std::option::Option<&str> {
        self.segment_id.as_deref()
    }
    pub fn write_segment_request(&self) -> std::option::Option<&crate::model::WriteSegmentRequest> {
        self.write_segment_request.as_ref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct SendMessagesInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    pub message_request: std::option::Option<crate::model::MessageRequest>,
}
impl SendMessagesInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn message_request(&self) -> std::option::Option<&crate::model::MessageRequest> {
        self.message_request.as_ref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateJourneyInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    pub write_journey_request: std::option::Option<crate::model::WriteJourneyRequest>,
}
impl CreateJourneyInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn write_journey_request(&self) -> std::option::Option<&crate::model::WriteJourneyRequest> {
        self.write_journey_request.as_ref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetJourneyInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    /// The unique identifier for the journey.
    pub journey_id: std::option::Option<std::string::String>,
}
impl GetJourneyInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn journey_id(&self) -> std::option::Option<&str> {
        self.journey_id.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct UpdateJourneyInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    /// The unique identifier for the journey.
    pub journey_id: std::option::Option<std::string::String>,
    pub write_journey_request: std::option::Option<crate::model::WriteJourneyRequest>,
}
impl UpdateJourneyInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn journey_id(&self) -> std::option::Option<&str> {
        self.journey_id.as_deref()
    }
    pub fn write_journey_request(&self) -> std::option::Option<&crate::model::WriteJourneyRequest> {
        self.write_journey_request.as_ref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct DeleteJourneyInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    /// The unique identifier for the journey.
    pub journey_id: std::option::Option<std::string::String>,
}
impl DeleteJourneyInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn journey_id(&self) -> std::option::Option<&str> {
        self.journey_id.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListJourneysInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    /// The maximum number of items to include in each page of a paginated response.
    pub page_size: std::option::Option<std::string::String>,
    /// The NextToken string that specifies which page of results to return in a paginated response.
    pub token: std::option::Option<std::string::String>,
}
impl ListJourneysInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn page_size(&self) -> std::option::Option<&str> {
        self.page_size.as_deref()
    }
    pub fn token(&self) -> std::option::Option<&str> {
        self.token.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetJourneyExecutionMetricsInput {
    /// The unique identifier for the application. This identifier is displayed as the **Project
    /// ID** on the Amazon Pinpoint console.
    pub application_id: std::option::Option<std::string::String>,
    /// The unique identifier for the journey.
    pub journey_id: std::option::Option<std::string::String>,
    /// The string that specifies which page of results to return in a paginated response.
    pub next_token: std::option::Option<std::string::String>,
    /// The maximum number of items to include in each page of a paginated response.
    pub page_size: std::option::Option<std::string::String>,
}
impl GetJourneyExecutionMetricsInput {
    pub fn application_id(&self) -> std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn journey_id(&self) -> std::option::Option<&str> {
        self.journey_id.as_deref()
    }
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
    pub fn page_size(&self) -> std::option::Option<&str> {
        self.page_size.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct CreateEmailTemplateInput {
    /// The name of the message template.
    pub template_name: std::option::Option<std::string::String>,
    pub email_template_request: std::option::Option<crate::model::EmailTemplateRequest>,
}
impl CreateEmailTemplateInput {
    pub fn template_name(&self) -> std::option::Option<&str> {
        self.template_name.as_deref()
    }
    pub fn email_template_request(&self) -> std::option::Option<&crate::model::EmailTemplateRequest> {
        self.email_template_request.as_ref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct GetEmailTemplateInput {
    /// The name of the message template.
    pub template_name: std::option::Option<std::string::String>,
    pub version: std::option::Option<std::string::String>,
}
impl GetEmailTemplateInput {
    pub fn template_name(&self) -> std::option::Option<&str> {
        self.template_name.as_deref()
    }
    pub fn version(&self) -> std::option::Option<&str> {
        self.version.as_deref()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
pub struct ListTemplatesInput {
    /// The string that specifies which page of results to return in a paginated response.
    pub next_token: std::option::Option<std::string::String>,
    /// The maximum number of items to include in each page of a paginated response.
    pub page_size: std::option::Option<std::string::String>,
    /// The substring to match in the names of the message templates to include in the results.
    pub prefix: std::option::Option<std::string::String>,
    /// The type of message template to include in the results. Valid values are: `EMAIL`, `PUSH`,
    /// `SMS`, and `VOICE`.
    pub template_type: std::option::Option<std::string::String>,
}
impl ListTemplatesInput {
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
    pub fn page_size(&self) -> std::option::Option<&str> {
        self.page_size.as_deref()
    }
    pub fn prefix(&self) -> std::option::Option<&str> {
        self.prefix.as_deref()
    }
    pub fn template_type(&self) -> std::option::Option<&str> {
        self.template_type.as_deref()
    }
}
