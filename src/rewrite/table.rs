//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Kichban.
//! The Kichban project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{KbError, Result};

/// Curated table of risky terms and their safer replacements.
///
/// Keys are canonical (lowercase, trimmed). Grouped by the kind of moderation
/// trigger they address.
const BUILTIN_TERMS: &[(&str, &str)] = &[
    // platforms & social media
    ("shopee", "sàn Cam"),
    ("lazada", "sàn Xanh"),
    ("tiki", "sàn T"),
    ("facebook", "nền tảng FB"),
    ("instagram", "nền tảng IG"),
    ("youtube", "nền tảng YT"),
    ("tiktok", "nền tảng này"),
    ("link in bio", "thông tin ở bio"),
    ("link", "liên kết"),
    ("click", "nhấn vào"),
    ("comment", "để lại ý kiến"),
    ("share", "chia sẻ"),
    ("like", "thả tim"),
    ("follow", "theo dõi"),
    ("dm", "nhắn tin"),
    ("inbox", "nhắn tin cho mình"),
    // sales & pricing
    ("mua bán", "trao đổi"),
    ("bán hàng", "chia sẻ"),
    ("mua ngay", "trải nghiệm ngay"),
    ("đặt hàng", "đăng ký"),
    ("thanh toán", "hoàn tất"),
    ("giảm giá", "ưu đãi"),
    ("khuyến mãi", "chương trình đặc biệt"),
    ("sale", "ưu đãi lớn"),
    ("flash sale", "giảm giá chớp nhoáng"),
    ("deal", "cơ hội tốt"),
    ("hot", "nổi bật"),
    ("trend", "xu hướng"),
    ("viral", "lan truyền"),
    ("miễn phí", "0 đồng"),
    ("free ship", "hỗ trợ phí vận chuyển"),
    ("rẻ nhất", "giá cực tốt"),
    ("giá rẻ", "giá ưu đãi"),
    ("giá sốc", "giá bất ngờ"),
    ("rẻ sập sàn", "giá cực tốt"),
    ("tiền", "ngân lượng"),
    ("tiền tệ", "tài chính"),
    // commitments & absolutes
    ("cam kết", "tự tin"),
    ("đảm bảo 100%", "hỗ trợ tối đa"),
    ("chắc chắn", "tin rằng"),
    ("tuyệt đối", "vô cùng hiệu quả"),
    ("hiệu quả 100%", "hiệu quả rõ rệt"),
    ("duy nhất", "đặc biệt"),
    ("hàng đầu", "nổi bật"),
    ("top 1", "được ưa chuộng"),
    ("số một", "được yêu thích"),
    ("thần thánh", "cực kỳ hiệu quả"),
    ("thần dược", "sản phẩm hỗ trợ tốt"),
    // health & medical
    ("khỏi bệnh", "cải thiện"),
    ("chữa trị", "hỗ trợ"),
    ("điều trị", "hỗ trợ"),
    ("bệnh", "vấn đề sức khỏe"),
    ("yếu sinh lý", "hỗ trợ phái mạnh"),
    ("tăng cân", "cải thiện cân nặng"),
    ("giảm cân", "quản lý vóc dáng"),
    ("thuốc", "sản phẩm"),
    ("bác sĩ", "chuyên gia"),
    ("phòng khám", "trung tâm chăm sóc"),
    ("bệnh viện", "cơ sở y tế"),
    // beauty & cosmetics
    ("eo thon", "vóc dáng cân đối"),
    ("dáng đẹp", "dáng xinh"),
    ("trị mụn", "hỗ trợ giảm mụn"),
    ("mụn", "làn da có khuyết điểm"),
    ("trị nám", "hỗ trợ làm mờ nám"),
    ("nám", "da không đều màu"),
    ("sẹo", "vết thâm"),
    ("mờ sẹo", "cải thiện vết thâm"),
    ("trắng da", "làm sáng da"),
    ("trắng bật tone", "da sáng mịn màng"),
    ("chống lão hóa", "hỗ trợ làn da trẻ trung"),
    ("xóa nhăn", "làm mờ nếp nhăn"),
    ("thẩm mỹ viện", "trung tâm làm đẹp"),
    ("dao kéo", "can thiệp thẩm mỹ"),
    ("phẫu thuật", "can thiệp thẩm mỹ"),
    // contact information
    ("liên hệ", "thông tin ở bio"),
    ("địa chỉ", "thông tin ở bio"),
    ("số điện thoại", "thông tin ở bio"),
    ("sđt", "thông tin ở bio"),
    ("zalo", "app ZL"),
    ("email", "thư điện tử"),
    // sensitive & banned content
    ("thuốc lá", "sản phẩm có hại"),
    ("rượu", "đồ uống có cồn"),
    ("bia", "đồ uống có cồn"),
    ("chất kích thích", "chất gây nghiện"),
    ("ma túy", "chất cấm"),
    ("cờ bạc", "trò chơi may rủi"),
    ("cá độ", "đặt cược"),
    ("vay tiền", "hỗ trợ tài chính"),
    ("tín dụng đen", "vay nặng lãi"),
    ("vũ khí", "vật nguy hiểm"),
    ("bạo lực", "hành động mạnh"),
    ("giết người", "hành vi nguy hiểm"),
    ("khiêu dâm", "nội dung nhạy cảm"),
    ("18+", "nội dung người lớn"),
    ("sexy", "quyến rũ"),
    ("lừa đảo", "hành vi không trung thực"),
    ("ăn cắp", "lấy đồ"),
    ("hack", "xâm nhập"),
];

/// Mapping from canonical risky terms to safe replacement phrases.
///
/// Keys are trimmed and lowercased on insertion and may contain internal
/// spaces. Replacements are kept verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct KbTermMap {
    entries: BTreeMap<String, String>,
}

impl KbTermMap {
    pub fn new() -> Self {
        KbTermMap {
            entries: BTreeMap::new(),
        }
    }

    /// The curated table shipped with the crate.
    pub fn builtin() -> Self {
        let entries = BUILTIN_TERMS
            .iter()
            .map(|(term, replacement)| (term.to_string(), replacement.to_string()))
            .collect();
        KbTermMap { entries }
    }

    /// Builds a table from pairs, rejecting duplicate canonical keys.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut map = KbTermMap::new();
        for (term, replacement) in pairs {
            let key = Self::canonical(term.as_ref())?;
            if map.entries.contains_key(&key) {
                return Err(KbError::validation(format!(
                    "duplicate term '{key}' in term table"
                )));
            }
            map.entries.insert(key, replacement.into());
        }
        Ok(map)
    }

    /// Canonical form of a term: trimmed and lowercased. Empty terms are rejected.
    pub fn canonical(term: &str) -> Result<String> {
        let key = term.trim().to_lowercase();
        if key.is_empty() {
            return Err(KbError::validation("term table keys may not be empty"));
        }
        Ok(key)
    }

    /// Inserts or overrides a term, returning the previous replacement.
    pub fn insert(&mut self, term: &str, replacement: impl Into<String>) -> Result<Option<String>> {
        let key = Self::canonical(term)?;
        Ok(self.entries.insert(key, replacement.into()))
    }

    /// Removes a term. The lookup uses the canonical form of `term`.
    pub fn remove(&mut self, term: &str) -> Option<String> {
        let key = term.trim().to_lowercase();
        self.entries.remove(&key)
    }

    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries
            .get(&term.trim().to_lowercase())
            .map(String::as_str)
    }

    /// Inserts every pair, overriding existing terms.
    pub fn extend<I, K, V>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (term, replacement) in pairs {
            self.insert(term.as_ref(), replacement)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in lexicographic key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(term, replacement)| (term.as_str(), replacement.as_str()))
    }
}

impl TryFrom<BTreeMap<String, String>> for KbTermMap {
    type Error = KbError;

    fn try_from(entries: BTreeMap<String, String>) -> Result<Self> {
        KbTermMap::from_pairs(entries)
    }
}

impl From<KbTermMap> for BTreeMap<String, String> {
    fn from(map: KbTermMap) -> Self {
        map.entries
    }
}
