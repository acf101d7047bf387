// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! View criteria selected on the dashboard.
//!
//! Each filter accepts its canonical token and the token the earlier
//! dashboard sent, so saved links keep working.

use crate::error::DomainError;
use crate::types::RecordKind;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Status filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// Transfers plus shipments still visible on the main view.
    #[default]
    Pending,
    /// Completed shipments only.
    Complete,
    All,
}

impl FromStr for StatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "pending" | "pendientes" => Ok(Self::Pending),
            "complete" | "completo" => Ok(Self::Complete),
            "all" | "todo" => Ok(Self::All),
            other => Err(invalid("status", other)),
        }
    }
}

/// Record kind filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindFilter {
    #[default]
    All,
    Only(RecordKind),
}

impl KindFilter {
    #[must_use]
    pub fn matches(self, kind: RecordKind) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == kind,
        }
    }
}

impl FromStr for KindFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" | "todo" => Ok(Self::All),
            "shipment" | "envio" => Ok(Self::Only(RecordKind::Shipment)),
            "transfer" | "transferencia" => Ok(Self::Only(RecordKind::Transfer)),
            other => Err(invalid("kind", other)),
        }
    }
}

/// Branch filter. A specific branch matches the origin branch of a
/// shipment and the source branch of a transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchFilter {
    #[default]
    All,
    Branch(String),
}

impl BranchFilter {
    #[must_use]
    pub fn matches(&self, branch: &str) -> bool {
        match self {
            Self::All => true,
            Self::Branch(wanted) => wanted == branch,
        }
    }
}

impl FromStr for BranchFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(invalid("branch", s)),
            "all" | "todo" => Ok(Self::All),
            branch => Ok(Self::Branch(branch.to_string())),
        }
    }
}

/// Date scope filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateScope {
    #[default]
    Today,
    All,
}

impl FromStr for DateScope {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "today" | "hoy" => Ok(Self::Today),
            "all" | "todo" => Ok(Self::All),
            other => Err(invalid("date", other)),
        }
    }
}

/// Dashboard counter bucket. Any bucket other than `All` forces the
/// pending status filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardBucket {
    #[default]
    All,
    Overdue,
    TransferPending,
}

impl FromStr for DashboardBucket {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" | "todos" => Ok(Self::All),
            "overdue" | "atrasados" => Ok(Self::Overdue),
            "transfer-pending" | "transf-pend" => Ok(Self::TransferPending),
            other => Err(invalid("bucket", other)),
        }
    }
}

/// Complete set of view criteria. The default is the dashboard's initial
/// state: pending records for today across every kind and branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewCriteria {
    pub status: StatusFilter,
    pub kind: KindFilter,
    pub branch: BranchFilter,
    pub date_scope: DateScope,
    pub bucket: DashboardBucket,
    /// Client name search, honoured only for the complete status.
    pub client_name_query: Option<String>,
}

impl ViewCriteria {
    /// Status filter actually applied once the bucket override is taken
    /// into account.
    #[must_use]
    pub fn effective_status(&self) -> StatusFilter {
        if self.bucket == DashboardBucket::All {
            self.status
        } else {
            StatusFilter::Pending
        }
    }

    /// Normalised client query, present only when it applies.
    #[must_use]
    pub fn effective_client_query(&self) -> Option<String> {
        if self.effective_status() != StatusFilter::Complete {
            return None;
        }
        self.client_name_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }
}

fn invalid(field: &'static str, value: &str) -> DomainError {
    DomainError::InvalidCriterion {
        field,
        value: value.to_string(),
    }
}
