use super::error::{DecodeError, PacketField, PacketLayer};
use super::layout;
use super::packet::{DataPacket, DmpLayer, FramingLayer, RootLayer};
use super::reader::SacnReader;

/// Decode and validate one sACN data packet from a raw datagram.
///
/// Structural extraction consumes exactly the 638-byte fixed layout; a
/// shorter payload fails with [`DecodeError::Truncated`]. Constant-field
/// checks then run outer layer first, in a fixed order, and report the
/// first failing invariant as a [`DecodeError::MalformedField`]. An
/// invalid outer layer makes inner fields meaningless, so the outermost
/// failure is the one worth logging.
///
/// The universe field is not checked here; routing a valid packet to the
/// configured universe belongs to `routing::extract_channel`. The low 12
/// bits of each flags-and-length word (the declared PDU length) are
/// decoded but not cross-checked against the buffer.
pub fn decode(payload: &[u8]) -> Result<DataPacket, DecodeError> {
    let reader = SacnReader::new(payload);
    reader.require_len(layout::PACKET_LEN)?;

    let root = RootLayer {
        preamble_size: reader.read_u16_be(layout::PREAMBLE_SIZE_RANGE.clone())?,
        postamble_size: reader.read_u16_be(layout::POSTAMBLE_SIZE_RANGE.clone())?,
        packet_identifier: reader.read_array(layout::ACN_PID_RANGE.clone())?,
        flags_and_length: reader.read_u16_be(layout::ROOT_FLAGS_LENGTH_RANGE.clone())?,
        vector: reader.read_u32_be(layout::ROOT_VECTOR_RANGE.clone())?,
        cid: reader.read_array(layout::CID_RANGE.clone())?,
    };

    let framing = FramingLayer {
        flags_and_length: reader.read_u16_be(layout::FRAMING_FLAGS_LENGTH_RANGE.clone())?,
        vector: reader.read_u32_be(layout::FRAMING_VECTOR_RANGE.clone())?,
        source: reader.read_array(layout::SOURCE_NAME_RANGE.clone())?,
        priority: reader.read_u8(layout::PRIORITY_OFFSET)?,
        sync_address: reader.read_u16_be(layout::SYNC_ADDRESS_RANGE.clone())?,
        sequence_number: reader.read_u8(layout::SEQUENCE_OFFSET)?,
        options: reader.read_u8(layout::OPTIONS_OFFSET)?,
        universe: reader.read_u16_be(layout::UNIVERSE_RANGE.clone())?,
    };

    let dmp = DmpLayer {
        flags_and_length: reader.read_u16_be(layout::DMP_FLAGS_LENGTH_RANGE.clone())?,
        vector: reader.read_u8(layout::DMP_VECTOR_OFFSET)?,
        address_and_data_type: reader.read_u8(layout::ADDRESS_TYPE_OFFSET)?,
        first_property_address: reader.read_u16_be(layout::FIRST_PROPERTY_ADDRESS_RANGE.clone())?,
        address_increment: reader.read_u16_be(layout::ADDRESS_INCREMENT_RANGE.clone())?,
        property_value_count: reader.read_u16_be(layout::PROPERTY_VALUE_COUNT_RANGE.clone())?,
        property_values: reader.read_array(layout::PROPERTY_VALUES_RANGE.clone())?,
    };

    if root.preamble_size != layout::PREAMBLE_SIZE {
        return Err(malformed(PacketLayer::Root, PacketField::PreambleSize));
    }
    if root.postamble_size != layout::POSTAMBLE_SIZE {
        return Err(malformed(PacketLayer::Root, PacketField::PostambleSize));
    }
    if root.packet_identifier != *layout::ACN_PID {
        return Err(malformed(PacketLayer::Root, PacketField::PacketIdentifier));
    }
    if root.flags_and_length & layout::PDU_FLAGS_MASK != layout::PDU_FLAGS {
        return Err(malformed(PacketLayer::Root, PacketField::Flags));
    }
    if root.vector != layout::ROOT_VECTOR_DATA {
        return Err(malformed(PacketLayer::Root, PacketField::Vector));
    }

    if framing.flags_and_length & layout::PDU_FLAGS_MASK != layout::PDU_FLAGS {
        return Err(malformed(PacketLayer::Framing, PacketField::Flags));
    }
    if framing.vector != layout::FRAMING_VECTOR_DMX {
        return Err(malformed(PacketLayer::Framing, PacketField::Vector));
    }
    if framing.options != layout::OPTIONS_NONE {
        return Err(malformed(PacketLayer::Framing, PacketField::Options));
    }

    if dmp.flags_and_length & layout::PDU_FLAGS_MASK != layout::PDU_FLAGS {
        return Err(malformed(PacketLayer::Dmp, PacketField::Flags));
    }
    if dmp.vector != layout::DMP_VECTOR_SET_PROPERTY {
        return Err(malformed(PacketLayer::Dmp, PacketField::Vector));
    }
    if dmp.address_and_data_type != layout::DMP_ADDRESS_AND_DATA_TYPE {
        return Err(malformed(PacketLayer::Dmp, PacketField::AddressType));
    }
    if dmp.first_property_address != layout::DMP_FIRST_PROPERTY_ADDRESS {
        return Err(malformed(PacketLayer::Dmp, PacketField::FirstPropertyAddress));
    }
    if dmp.address_increment != layout::DMP_ADDRESS_INCREMENT {
        return Err(malformed(PacketLayer::Dmp, PacketField::AddressIncrement));
    }
    if dmp.property_values[0] != layout::DMX_START_CODE_NULL {
        return Err(malformed(PacketLayer::Dmp, PacketField::StartCode));
    }

    Ok(DataPacket { root, framing, dmp })
}

fn malformed(layer: PacketLayer, field: PacketField) -> DecodeError {
    DecodeError::MalformedField { layer, field }
}
