use super::layout;

/// Outermost ACN layer. `cid` identifies the sending component and is
/// carried opaque, never validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootLayer {
    pub preamble_size: u16,
    pub postamble_size: u16,
    pub packet_identifier: [u8; 12],
    pub flags_and_length: u16,
    pub vector: u32,
    pub cid: [u8; 16],
}

/// E1.31 framing layer. `priority`, `sync_address` and `sequence_number`
/// are decoded but not enforced; there is no reordering or dedup logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramingLayer {
    pub flags_and_length: u16,
    pub vector: u32,
    pub source: [u8; 64],
    pub priority: u8,
    pub sync_address: u16,
    pub sequence_number: u8,
    pub options: u8,
    pub universe: u16,
}

impl FramingLayer {
    /// Source name decoded as text, with trailing NUL padding removed.
    pub fn source_name(&self) -> String {
        let raw = String::from_utf8_lossy(&self.source);
        raw.trim_end_matches('\0').trim().to_string()
    }
}

/// Device Management Protocol layer. `property_values[0]` is the DMX start
/// code; slots 1..=512 are channel values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DmpLayer {
    pub flags_and_length: u16,
    pub vector: u8,
    pub address_and_data_type: u8,
    pub first_property_address: u16,
    pub address_increment: u16,
    pub property_value_count: u16,
    pub property_values: [u8; layout::PROPERTY_VALUES_LEN],
}

/// One validated sACN data packet: the three layers in wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPacket {
    pub root: RootLayer,
    pub framing: FramingLayer,
    pub dmp: DmpLayer,
}

impl DataPacket {
    /// Serialize into the 638-byte wire form, the exact inverse of the
    /// structural extraction in `parser::decode`.
    pub fn pack(&self) -> [u8; layout::PACKET_LEN] {
        let mut buf = [0u8; layout::PACKET_LEN];

        buf[layout::PREAMBLE_SIZE_RANGE.clone()]
            .copy_from_slice(&self.root.preamble_size.to_be_bytes());
        buf[layout::POSTAMBLE_SIZE_RANGE.clone()]
            .copy_from_slice(&self.root.postamble_size.to_be_bytes());
        buf[layout::ACN_PID_RANGE.clone()].copy_from_slice(&self.root.packet_identifier);
        buf[layout::ROOT_FLAGS_LENGTH_RANGE.clone()]
            .copy_from_slice(&self.root.flags_and_length.to_be_bytes());
        buf[layout::ROOT_VECTOR_RANGE.clone()].copy_from_slice(&self.root.vector.to_be_bytes());
        buf[layout::CID_RANGE.clone()].copy_from_slice(&self.root.cid);

        buf[layout::FRAMING_FLAGS_LENGTH_RANGE.clone()]
            .copy_from_slice(&self.framing.flags_and_length.to_be_bytes());
        buf[layout::FRAMING_VECTOR_RANGE.clone()]
            .copy_from_slice(&self.framing.vector.to_be_bytes());
        buf[layout::SOURCE_NAME_RANGE.clone()].copy_from_slice(&self.framing.source);
        buf[layout::PRIORITY_OFFSET] = self.framing.priority;
        buf[layout::SYNC_ADDRESS_RANGE.clone()]
            .copy_from_slice(&self.framing.sync_address.to_be_bytes());
        buf[layout::SEQUENCE_OFFSET] = self.framing.sequence_number;
        buf[layout::OPTIONS_OFFSET] = self.framing.options;
        buf[layout::UNIVERSE_RANGE.clone()].copy_from_slice(&self.framing.universe.to_be_bytes());

        buf[layout::DMP_FLAGS_LENGTH_RANGE.clone()]
            .copy_from_slice(&self.dmp.flags_and_length.to_be_bytes());
        buf[layout::DMP_VECTOR_OFFSET] = self.dmp.vector;
        buf[layout::ADDRESS_TYPE_OFFSET] = self.dmp.address_and_data_type;
        buf[layout::FIRST_PROPERTY_ADDRESS_RANGE.clone()]
            .copy_from_slice(&self.dmp.first_property_address.to_be_bytes());
        buf[layout::ADDRESS_INCREMENT_RANGE.clone()]
            .copy_from_slice(&self.dmp.address_increment.to_be_bytes());
        buf[layout::PROPERTY_VALUE_COUNT_RANGE.clone()]
            .copy_from_slice(&self.dmp.property_value_count.to_be_bytes());
        buf[layout::PROPERTY_VALUES_RANGE.clone()].copy_from_slice(&self.dmp.property_values);

        buf
    }
}

#[cfg(test)]
mod tests {
    use super::FramingLayer;
    use crate::protocols::sacn::layout;

    fn framing_with_source(source: [u8; 64]) -> FramingLayer {
        FramingLayer {
            flags_and_length: layout::PDU_FLAGS,
            vector: layout::FRAMING_VECTOR_DMX,
            source,
            priority: 100,
            sync_address: 0,
            sequence_number: 0,
            options: 0,
            universe: 1,
        }
    }

    #[test]
    fn source_name_trims_nul_padding() {
        let mut source = [0u8; 64];
        source[..9].copy_from_slice(b"Console A");
        let framing = framing_with_source(source);
        assert_eq!(framing.source_name(), "Console A");
    }

    #[test]
    fn source_name_empty_when_all_nul() {
        let framing = framing_with_source([0u8; 64]);
        assert_eq!(framing.source_name(), "");
    }
}
