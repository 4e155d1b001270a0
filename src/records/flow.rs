use crate::error::RecordError;
use crate::parser::{Fields, Record};
use flowtag_common::IanaProtocol;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One row of a version 2 VPC flow log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowRecord {
    pub version: i64,
    pub account_id: String,
    pub interface_id: String,
    pub src_addr: String,
    pub dst_addr: String,
    pub src_port: i64,
    pub dst_port: i64,
    pub protocol: IanaProtocol,
    pub packets: i64,
    pub bytes: i64,
    pub start_secs: i64,
    pub end_secs: i64,
    pub action: Action,
    pub log_status: LogStatus,
}

impl Record for FlowRecord {
    const NAME: &'static str = "FlowRecord";
    const FIELDS: &'static [&'static str] = &[
        "version",
        "account_id",
        "interface_id",
        "src_addr",
        "dst_addr",
        "src_port",
        "dst_port",
        "protocol",
        "packets",
        "bytes",
        "start",
        "end",
        "action",
        "log_status",
    ];

    fn from_fields(fields: &mut Fields<'_>) -> Result<Self, RecordError> {
        Ok(Self {
            version: fields.next_parsed()?,
            account_id: fields.next_str()?.to_string(),
            interface_id: fields.next_str()?.to_string(),
            src_addr: fields.next_str()?.to_string(),
            dst_addr: fields.next_str()?.to_string(),
            src_port: fields.next_parsed()?,
            dst_port: fields.next_parsed()?,
            protocol: fields.next_parsed()?,
            packets: fields.next_parsed()?,
            bytes: fields.next_parsed()?,
            start_secs: fields.next_parsed()?,
            end_secs: fields.next_parsed()?,
            action: fields.next_parsed()?,
            log_status: fields.next_parsed()?,
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected one of {expected:?}")]
pub struct ParseEnumError {
    expected: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Accept,
    Reject,
    Unknown,
}

impl Action {
    const VALUES: &'static [&'static str] = &["ACCEPT", "REJECT", "-"];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Action::Accept => "ACCEPT",
            Action::Reject => "REJECT",
            Action::Unknown => "-",
        }
    }
}

impl FromStr for Action {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACCEPT" => Ok(Action::Accept),
            "REJECT" => Ok(Action::Reject),
            "-" => Ok(Action::Unknown),
            _ => Err(ParseEnumError {
                expected: Self::VALUES,
            }),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStatus {
    Ok,
    NoData,
    SkipData,
}

impl LogStatus {
    const VALUES: &'static [&'static str] = &["OK", "NODATA", "SKIPDATA"];

    pub const fn as_str(&self) -> &'static str {
        match self {
            LogStatus::Ok => "OK",
            LogStatus::NoData => "NODATA",
            LogStatus::SkipData => "SKIPDATA",
        }
    }
}

impl FromStr for LogStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OK" => Ok(LogStatus::Ok),
            "NODATA" => Ok(LogStatus::NoData),
            "SKIPDATA" => Ok(LogStatus::SkipData),
            _ => Err(ParseEnumError {
                expected: Self::VALUES,
            }),
        }
    }
}

impl fmt::Display for LogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
