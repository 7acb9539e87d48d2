use super::model::NewCheckIn;

const SAMPLE_CHECK_INS: [(&str, i32, &str, [&str; 2]); 7] = [
    ("小明", 1, "VN", ["authentic", "wanna_more"]),
    ("美食家", 1, "JP", ["beautiful", "stall"]),
    ("張同學", 2, "TH", ["authentic", "value"]),
    ("王小華", 2, "FR", ["beautiful", "service"]),
    ("酷小子", 3, "KR", ["wanna_more", "stall"]),
    ("旅人", 3, "ID", ["value", "authentic"]),
    ("吃貨王", 1, "VN", ["value", "wanna_more"]),
];

pub fn sample_check_ins() -> Vec<NewCheckIn> {
    SAMPLE_CHECK_INS
        .iter()
        .map(|(nickname, day, country_code, tags)| NewCheckIn {
            nickname: nickname.to_string(),
            day: *day,
            country_code: country_code.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        })
        .collect()
}
