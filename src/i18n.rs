use std::collections::HashMap;
use std::fs;
use std::path::Path;
use log::warn;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const REPORT_HEADING: &str = "report.heading";

    pub const METHOD_MANTON: &str = "method.manton";
    pub const METHOD_LEWIS_VON_ELBE: &str = "method.lewis_von_elbe";
    pub const METHOD_DAHOE_2005: &str = "method.dahoe_2005";
    pub const METHOD_DAHOE_2013: &str = "method.dahoe_2013";

    pub const CHART_MANTON: &str = "chart.manton";
    pub const CHART_LEWIS_VON_ELBE: &str = "chart.lewis_von_elbe";
    pub const CHART_DAHOE_2005: &str = "chart.dahoe_2005";
    pub const CHART_DAHOE_2013: &str = "chart.dahoe_2013";
    pub const CHART_TITLE: &str = "chart.title";
    pub const CHART_X_LABEL: &str = "chart.x_label";
    pub const CHART_Y_LABEL: &str = "chart.y_label";

    pub const GUI_WINDOW_TITLE: &str = "gui.window_title";
    pub const GUI_SCENARIO_HEADING: &str = "gui.scenario_heading";
    pub const GUI_RESULTS_HEADING: &str = "gui.results_heading";
    pub const GUI_COLUMN_METHOD: &str = "gui.column_method";
    pub const GUI_COLUMN_VALUE: &str = "gui.column_value";

    pub const PARAM_P_MAX: &str = "param.p_max";
    pub const PARAM_DPDT_MAX: &str = "param.dpdt_max";
    pub const PARAM_VOLUME: &str = "param.volume";
    pub const PARAM_P0: &str = "param.p0";
    pub const PARAM_RHO0: &str = "param.rho0";
    pub const PARAM_GAMMA: &str = "param.gamma";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }

    /// 언어팩 파일 이름(locales/ 와 동일).
    pub fn pack_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko-kr",
            Language::En => "en-us",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
///
/// 영어 내장 팩 위에 선택 언어의 내장 팩, 그 위에 외부 언어팩을 차례로 덮어쓴다.
/// 따라서 어떤 키든 최소한 영어 문자열로는 조회된다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    strings: HashMap<String, String>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 내장 문자열만으로 번역기를 생성한다.
    pub fn new(lang_code: &str) -> Self {
        Self::new_with_pack(lang_code, None)
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let lang = Language::from_code(lang_code);
        let mut strings = built_in_pack(Language::En);
        if lang != Language::En {
            strings.extend(built_in_pack(lang));
        }
        if let Some(dir) = pack_dir {
            match load_overrides(dir, lang_code, lang) {
                Some(overrides) => strings.extend(overrides),
                None => {
                    warn!("no language pack for '{lang_code}' in {dir}; using built-in strings")
                }
            }
        }
        Self { lang, strings }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.strings.get(key).cloned()
    }

    /// 번역을 가져온다. 어느 팩에도 없으면 키 자체를 돌려준다.
    pub fn t(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| key.to_string())
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 테이블.
fn load_overrides(
    dir: &str,
    lang: &str,
    language: Language,
) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    // 3) canonical pack name (e.g., ko -> ko-kr)
    try_load(language.pack_code())
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: Language) -> HashMap<String, String> {
    let src = match lang {
        Language::En => include_str!("../locales/en-us.toml"),
        Language::Ko => include_str!("../locales/ko-kr.toml"),
    };
    parse_toml_to_map(src).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: &[&str] = &[
        keys::REPORT_HEADING,
        keys::METHOD_MANTON,
        keys::METHOD_LEWIS_VON_ELBE,
        keys::METHOD_DAHOE_2005,
        keys::METHOD_DAHOE_2013,
        keys::CHART_MANTON,
        keys::CHART_LEWIS_VON_ELBE,
        keys::CHART_DAHOE_2005,
        keys::CHART_DAHOE_2013,
        keys::CHART_TITLE,
        keys::CHART_X_LABEL,
        keys::CHART_Y_LABEL,
        keys::GUI_WINDOW_TITLE,
        keys::GUI_SCENARIO_HEADING,
        keys::GUI_RESULTS_HEADING,
        keys::GUI_COLUMN_METHOD,
        keys::GUI_COLUMN_VALUE,
        keys::PARAM_P_MAX,
        keys::PARAM_DPDT_MAX,
        keys::PARAM_VOLUME,
        keys::PARAM_P0,
        keys::PARAM_RHO0,
        keys::PARAM_GAMMA,
    ];

    #[test]
    fn built_in_packs_cover_every_key() {
        for lang in [Language::En, Language::Ko] {
            let pack = built_in_pack(lang);
            for key in ALL_KEYS {
                assert!(pack.contains_key(*key), "{lang:?} pack missing {key}");
            }
        }
    }

    #[test]
    fn unknown_code_falls_back_to_english() {
        let tr = Translator::new("de-de");
        assert_eq!(tr.language(), Language::En);
        assert_eq!(tr.t(keys::METHOD_MANTON), "Manton's Method");
    }

    #[test]
    fn missing_key_returns_key() {
        let tr = Translator::new("en");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("ko-KR", Some("en")), "ko-kr");
        assert_eq!(resolve_language("auto", Some("en-uk")), "en-us");
    }

    fn pack_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("lbv_i18n_{name}_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn external_pack_overrides_short_code() {
        let dir = pack_dir("ko");
        fs::write(dir.join("ko-kr.toml"), "[method]\nmanton = \"덮어쓴 Manton\"\n").unwrap();
        let lang = resolve_language("ko", None);
        let tr = Translator::new_with_pack(&lang, dir.to_str());
        assert_eq!(tr.language(), Language::Ko);
        assert_eq!(tr.t(keys::METHOD_MANTON), "덮어쓴 Manton");
        // 팩에 없는 키는 내장 한국어 문자열 유지
        assert_eq!(tr.t(keys::METHOD_DAHOE_2005), "Dahoe 2005 방법");
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn external_pack_overrides_english() {
        let dir = pack_dir("en");
        fs::write(dir.join("en-us.toml"), "[method]\nmanton = \"Manton (custom)\"\n").unwrap();
        for code in ["en", "en-us"] {
            let tr = Translator::new_with_pack(code, dir.to_str());
            assert_eq!(tr.t(keys::METHOD_MANTON), "Manton (custom)", "{code}");
        }
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_pack_dir_keeps_built_in_strings() {
        let tr = Translator::new_with_pack("en", Some("no/such/dir"));
        assert_eq!(tr.t(keys::METHOD_MANTON), "Manton's Method");
    }

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[a]\nb = \"x\"\n[a.c]\nd = \"y\"\n").unwrap();
        assert_eq!(map.get("a.b").map(String::as_str), Some("x"));
        assert_eq!(map.get("a.c.d").map(String::as_str), Some("y"));
    }
}
