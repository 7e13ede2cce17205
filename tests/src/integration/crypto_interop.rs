//! # Point Codec and Verifier Interop
//!
//! kv-01 implements decompression and verification over its own field
//! arithmetic. These tests hold it to the `k256` reference on random keys.

#[cfg(test)]
mod tests {
    use k256::ecdsa::signature::hazmat::PrehashVerifier;
    use k256::ecdsa::{Signature, SigningKey};
    use k256::elliptic_curve::sec1::ToEncodedPoint;
    use kv_01_signature_verification::{
        compress, decompress, verify_ecdsa, CurvePoint, EcdsaSignature, PointError,
    };
    use rand::RngCore;
    use sha2::{Digest, Sha256};

    fn random_key() -> SigningKey {
        SigningKey::random(&mut rand::thread_rng())
    }

    #[test]
    fn test_decompress_matches_k256_for_random_keys() {
        for _ in 0..32 {
            let key = random_key();
            let affine = key.verifying_key().as_affine();
            let compressed = affine.to_encoded_point(true);

            let ours = decompress(compressed.as_bytes()).unwrap();
            let reference = CurvePoint::try_from(affine).unwrap();
            assert_eq!(ours, reference);

            assert_eq!(compress(&ours).unwrap().as_bytes()[..], compressed.as_bytes()[..]);
        }
    }

    #[test]
    fn test_x_without_square_root_is_rejected() {
        // 7 is not a quadratic residue mod p, so no point has x = 0.
        let mut encoded = [0u8; 33];
        encoded[0] = 0x02;
        assert_eq!(decompress(&encoded), Err(PointError::NotOnCurve));
        assert!(k256::PublicKey::from_sec1_bytes(&encoded).is_err());
    }

    #[test]
    fn test_verifier_agrees_with_k256() {
        let mut rng = rand::thread_rng();

        for round in 0..32 {
            let key = random_key();
            let public_key = CurvePoint::try_from(key.verifying_key().as_affine()).unwrap();

            let mut message = [0u8; 48];
            rng.fill_bytes(&mut message);
            let digest: [u8; 32] = Sha256::digest(message).into();

            let (signature, _) = key.sign_prehash_recoverable(&digest).unwrap();
            let mut bytes: [u8; 64] = signature.to_bytes().as_slice().try_into().unwrap();

            // Corrupt every other round.
            if round % 2 == 1 {
                bytes[(round * 7) % 64] ^= 1 << (round % 8);
            }

            let ours = verify_ecdsa(&digest, &EcdsaSignature::from_bytes(&bytes), &public_key);
            let reference = Signature::from_slice(&bytes)
                .map(|sig| key.verifying_key().verify_prehash(&digest, &sig).is_ok())
                .unwrap_or(false);

            assert_eq!(ours, reference, "disagreement in round {round}");
            assert_eq!(ours, round % 2 == 0);
        }
    }
}
