use crate::error::RecordError;
use crate::parser::{Fields, Record};

/// One `dstport,protocol,tag` mapping rule.
///
/// The protocol is always stored lowercased, however the record was built;
/// it is not validated against any protocol table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    pub dst_port: i64,
    pub protocol: String,
    pub tag: String,
}

impl TagRecord {
    pub fn new(dst_port: i64, protocol: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            dst_port,
            protocol: protocol.into().to_lowercase(),
            tag: tag.into(),
        }
    }
}

impl Record for TagRecord {
    const NAME: &'static str = "TagRecord";
    const FIELDS: &'static [&'static str] = &["dst_port", "protocol", "tag"];

    fn from_fields(fields: &mut Fields<'_>) -> Result<Self, RecordError> {
        Ok(Self::new(
            fields.next_parsed()?,
            fields.next_str()?,
            fields.next_str()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_record() {
        let record = TagRecord::parse(&["110", "tcp", "email"]).unwrap();
        assert_eq!(record, TagRecord::new(110, "tcp", "email"));
    }

    #[test]
    fn test_new_lowercases_protocol() {
        assert_eq!(TagRecord::new(25, "TCP", "Mail").protocol, "tcp");
        assert_eq!(TagRecord::new(25, "TCP", "Mail").tag, "Mail");
    }

    #[test]
    fn test_parse_lowercases_protocol_without_line_transform() {
        let record = TagRecord::parse(&["25", "TCP", "Mail"]).unwrap();
        assert_eq!(record.protocol, "tcp");
        assert_eq!(record.tag, "Mail");
    }

    #[test]
    fn test_port_range_not_validated() {
        assert_eq!(TagRecord::parse(&["-1", "tcp", "x"]).unwrap().dst_port, -1);
        assert_eq!(
            TagRecord::parse(&["5000000000", "tcp", "x"]).unwrap().dst_port,
            5_000_000_000
        );
        assert!(TagRecord::parse(&["http", "tcp", "x"]).is_err());
    }
}
