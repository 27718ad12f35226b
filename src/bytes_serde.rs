#[cfg(feature = "base64")]
mod b64 {
    use base64::engine::general_purpose;
    use base64::Engine as _;
    use serde::de::{Error, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::types::{Bytes, StackByteArray};

    impl<const LENGTH: usize> Serialize for StackByteArray<LENGTH> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&general_purpose::STANDARD.encode(self.as_slice()))
        }
    }

    impl<'de, const LENGTH: usize> Deserialize<'de> for StackByteArray<LENGTH> {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct ByteArrayVisitor<const LENGTH: usize>;

            impl<'de, const LENGTH: usize> Visitor<'de> for ByteArrayVisitor<LENGTH> {
                type Value = StackByteArray<LENGTH>;

                fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                    write!(formatter, "a base64 string encoding {} bytes", LENGTH)
                }

                fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
                where
                    E: Error,
                {
                    let decoded = general_purpose::STANDARD
                        .decode(s)
                        .map_err(|err| Error::custom(err.to_string()))?;
                    if decoded.len() != LENGTH {
                        return Err(Error::invalid_length(decoded.len(), &self));
                    }
                    let mut arr = StackByteArray::<LENGTH>::new();
                    arr.copy_from_slice(&decoded);
                    Ok(arr)
                }
            }

            deserializer.deserialize_str(ByteArrayVisitor::<LENGTH>)
        }
    }
}

#[cfg(not(feature = "base64"))]
mod raw {
    use serde::de::{Error, SeqAccess, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::types::{Bytes, StackByteArray};

    impl<const LENGTH: usize> Serialize for StackByteArray<LENGTH> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_bytes(self.as_slice())
        }
    }

    impl<'de, const LENGTH: usize> Deserialize<'de> for StackByteArray<LENGTH> {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct ByteArrayVisitor<const LENGTH: usize>;

            impl<'de, const LENGTH: usize> Visitor<'de> for ByteArrayVisitor<LENGTH> {
                type Value = StackByteArray<LENGTH>;

                fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                    write!(formatter, "{} bytes", LENGTH)
                }

                fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
                where
                    E: Error,
                {
                    if v.len() != LENGTH {
                        return Err(Error::invalid_length(v.len(), &self));
                    }
                    let mut arr = StackByteArray::<LENGTH>::new();
                    arr.copy_from_slice(v);
                    Ok(arr)
                }

                fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
                where
                    A: SeqAccess<'de>,
                {
                    let mut arr = StackByteArray::<LENGTH>::new();
                    let mut idx: usize = 0;
                    while let Some(elem) = seq.next_element::<u8>()? {
                        if idx >= LENGTH {
                            return Err(Error::invalid_length(idx + 1, &self));
                        }
                        arr[idx] = elem;
                        idx += 1;
                    }
                    if idx != LENGTH {
                        return Err(Error::invalid_length(idx, &self));
                    }
                    Ok(arr)
                }
            }

            deserializer.deserialize_bytes(ByteArrayVisitor::<LENGTH>)
        }
    }
}
