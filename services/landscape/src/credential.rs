// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};

use landscape_core::{utils::Redact, Error, Result};

/// Credential for the Landscape API.
#[derive(Clone)]
pub struct Credential {
    /// Access key id of the API user.
    pub access_key_id: String,
    /// Secret access key of the API user.
    pub secret_access_key: String,
}

impl Credential {
    /// Create a new credential, both parts must be non-empty.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Result<Self> {
        let access_key_id = access_key_id.into();
        let secret_access_key = secret_access_key.into();

        if access_key_id.is_empty() {
            return Err(Error::config_invalid("no access_key_id provided"));
        }
        if secret_access_key.is_empty() {
            return Err(Error::config_invalid("no secret_access_key provided"));
        }

        Ok(Self {
            access_key_id,
            secret_access_key,
        })
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .finish()
    }
}
