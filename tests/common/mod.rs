#![allow(dead_code)]

/// Static merchant payload as printed on a counter sticker.
pub const STATIC_PAYLOAD: &str = "00020101021126670014ID.CO.QRIS.WWW01189360091530000123450216ID102000000123450303UMI51440014ID.CO.QRIS.WWW0215ID10200000012340303UMI5204541153033605802ID5913TEST MERCHANT6007JAKARTA61051011062070703A01630479DA";

/// `STATIC_PAYLOAD` generated for 15000 with no fee and no overrides.
pub const DYNAMIC_15000: &str = "00020101021226670014ID.CO.QRIS.WWW01189360091530000123450216ID102000000123450303UMI51440014ID.CO.QRIS.WWW0215ID10200000012340303UMI520454115303360540815000.005802ID5913TEST MERCHANT6007JAKARTA61051011062070703A0163044FCA";

pub const MERCHANT_PAN: &str = "936009153000012345";
