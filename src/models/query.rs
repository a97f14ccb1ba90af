// 查询参数集合
//
// 对应浏览器地址栏中的 search params：
// - 键唯一，重复写入时替换原值但保留原位置
// - 保持插入顺序，保证生成的 URL 可复现
// - 只负责 x-www-form-urlencoded 的解析与序列化，不关心具体字段含义

use serde::ser::{Serialize, SerializeMap, Serializer};

/// 有序、键唯一的查询参数集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从原始查询字符串解析（可带前导 `?`）
    ///
    /// 同名参数以最后一次出现的值为准
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        url::form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// 写入参数；键已存在时原位替换
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// 序列化为 `a=1&b=2` 形式（不带 `?`），按插入顺序输出
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.entries {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

// JSON 中输出为对象，字段顺序与插入顺序一致
impl Serialize for QueryParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decodes_percent_encoding() {
        let params = QueryParams::parse("?genres=Slice%20of%20Life,Drama&year=1999");
        assert_eq!(params.get("genres"), Some("Slice of Life,Drama"));
        assert_eq!(params.get("year"), Some("1999"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_parse_last_value_wins() {
        let params = QueryParams::parse("year=1999&season=FALL&year=2001");
        assert_eq!(params.get("year"), Some("2001"));
        // 位置保持第一次出现的位置
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["year", "season"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = QueryParams::new();
        params.insert("a", "1");
        params.insert("b", "2");
        params.insert("a", "3");
        assert_eq!(params.to_query_string(), "a=3&b=2");
    }

    #[test]
    fn test_remove() {
        let mut params: QueryParams = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(params.remove("a"), Some("1".to_string()));
        assert_eq!(params.remove("a"), None);
        assert_eq!(params.to_query_string(), "b=2");
    }

    #[test]
    fn test_query_string_escapes_values() {
        let params: QueryParams = [("query", "one piece"), ("with_genres", "28,12")]
            .into_iter()
            .collect();
        assert_eq!(params.to_query_string(), "query=one+piece&with_genres=28%2C12");
        assert_eq!(QueryParams::parse(&params.to_query_string()), params);
    }

    #[test]
    fn test_empty_query() {
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
        assert_eq!(QueryParams::new().to_query_string(), "");
    }

    #[test]
    fn test_serialize_as_object() {
        let params: QueryParams = [("year", "1999"), ("format", "TV")].into_iter().collect();
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"year":"1999","format":"TV"}"#);
    }
}
