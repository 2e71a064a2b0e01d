//! Feature probe.
//!
//! The registry answers `true` for the generic probe identifier and for
//! its own identifier, the XOR of the 4-byte selectors of every function
//! in its public surface.

use alloy_primitives::keccak256;

use crate::record::RecordStore;

use super::DelegateRegistry;

/// The generic "do you support probing" identifier.
pub const INTERFACE_PROBE_ID: [u8; 4] = [0x01, 0xff, 0xc9, 0xa7];

/// Canonical signatures of the registry's public functions.
pub const REGISTRY_SIGNATURES: &[&str] = &[
    "delegateForAll(address,bytes32,bool)",
    "delegateForContract(address,address,bytes32,bool)",
    "delegateForERC721(address,address,uint256,bytes32,bool)",
    "delegateForERC20(address,address,uint256,bytes32,bool)",
    "delegateForERC1155(address,address,uint256,uint256,bytes32,bool)",
    "batchDelegate((uint8,address,bytes32,address,uint256,uint256,bool)[])",
    "checkDelegateForAll(address,address,bytes32)",
    "checkDelegateForContract(address,address,address,bytes32)",
    "checkDelegateForERC721(address,address,address,uint256,bytes32)",
    "checkDelegateForERC20(address,address,address,bytes32)",
    "checkDelegateForERC1155(address,address,address,uint256,bytes32)",
    "delegationsForVault(address)",
    "delegationsForDelegate(address)",
    "outgoingDelegationHashes(address)",
    "incomingDelegationHashes(address)",
    "delegationsFromHashes(bytes32[])",
    "readSlot(bytes32)",
    "readSlots(bytes32[])",
];

/// First four bytes of the keccak256 of `signature`.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// The registry's own capability identifier.
pub fn registry_interface_id() -> [u8; 4] {
    REGISTRY_SIGNATURES
        .iter()
        .map(|sig| selector(sig))
        .fold([0u8; 4], |acc, sel| {
            [
                acc[0] ^ sel[0],
                acc[1] ^ sel[1],
                acc[2] ^ sel[2],
                acc[3] ^ sel[3],
            ]
        })
}

/// True for exactly [`INTERFACE_PROBE_ID`] and [`registry_interface_id`].
pub fn supports_interface(id: [u8; 4]) -> bool {
    id == INTERFACE_PROBE_ID || id == registry_interface_id()
}

impl<S: RecordStore> DelegateRegistry<S> {
    /// See [`supports_interface`].
    pub fn supports_interface(&self, id: [u8; 4]) -> bool {
        supports_interface(id)
    }
}
