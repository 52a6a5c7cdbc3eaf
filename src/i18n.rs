use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_RUN_DESIGN: &str = "main_menu.run_design";
    pub const MAIN_MENU_EDIT_INPUTS: &str = "main_menu.edit_inputs";
    pub const MAIN_MENU_LINE_TABLE: &str = "main_menu.line_table";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const EDIT_HEADING: &str = "edit.heading";
    pub const EDIT_KEEP_HINT: &str = "edit.keep_hint";
    pub const EDIT_DONE: &str = "edit.done";
    pub const PROMPT_GAS_FLOW: &str = "prompt.gas_flow";
    pub const PROMPT_LIQUID_FLOW: &str = "prompt.liquid_flow";
    pub const PROMPT_Y_IN: &str = "prompt.y_in";
    pub const PROMPT_Y_OUT: &str = "prompt.y_out";
    pub const PROMPT_X_IN: &str = "prompt.x_in";
    pub const PROMPT_EQUILIBRIUM_SLOPE: &str = "prompt.equilibrium_slope";
    pub const PROMPT_HOG: &str = "prompt.hog";
    pub const PROMPT_TEMPERATURE: &str = "prompt.temperature";
    pub const PROMPT_PRESSURE: &str = "prompt.pressure";
    pub const PROMPT_GAS_CONSTANT: &str = "prompt.gas_constant";
    pub const PROMPT_TARGET_VELOCITY: &str = "prompt.target_velocity";
    pub const PROMPT_PACKING_SURFACE: &str = "prompt.packing_surface";
    pub const PROMPT_VOID_FRACTION: &str = "prompt.void_fraction";
    pub const PROMPT_BULK_DENSITY: &str = "prompt.bulk_density";
    pub const PROMPT_DP_PER_M: &str = "prompt.dp_per_m";
    pub const PROMPT_ELEMENT_SIZE: &str = "prompt.element_size";

    pub const REPORT_HEADER: &str = "report.header";
    pub const REPORT_FOOTER: &str = "report.footer";
    pub const REPORT_GAS_FLOW: &str = "report.gas_flow";
    pub const REPORT_LIQUID_FLOW: &str = "report.liquid_flow";
    pub const REPORT_VOLUMETRIC_FLOW: &str = "report.volumetric_flow";
    pub const REPORT_TARGET_VELOCITY: &str = "report.target_velocity";
    pub const REPORT_COLUMN_AREA: &str = "report.column_area";
    pub const REPORT_COLUMN_DIAMETER: &str = "report.column_diameter";
    pub const REPORT_MIN_PACKING_DIAMETER: &str = "report.min_packing_diameter";
    pub const REPORT_X_OUT: &str = "report.x_out";
    pub const REPORT_NTU: &str = "report.ntu";
    pub const REPORT_PACKED_HEIGHT: &str = "report.packed_height";
    pub const REPORT_PACKED_VOLUME: &str = "report.packed_volume";
    pub const REPORT_PACKING_MASS: &str = "report.packing_mass";
    pub const REPORT_TOTAL_DP: &str = "report.total_dp";

    pub const LINES_HEADING: &str = "lines.heading";
    pub const LINES_PROMPT_COUNT: &str = "lines.prompt_count";
    pub const LINES_TABLE_HEADER: &str = "lines.table_header";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
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
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
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
    None
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
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Absorption Column Toolbox ===",
        MAIN_MENU_RUN_DESIGN => "1) 설계 계산 실행",
        MAIN_MENU_EDIT_INPUTS => "2) 입력값 편집",
        MAIN_MENU_LINE_TABLE => "3) 평형선/운전선 표",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        EDIT_HEADING => "\n-- 입력값 편집 --",
        EDIT_KEEP_HINT => "엔터만 누르면 현재 값을 유지합니다.",
        EDIT_DONE => "입력값을 갱신했습니다.",
        PROMPT_GAS_FLOW => "가스 몰유량 G [kmol/h]",
        PROMPT_LIQUID_FLOW => "액체 몰유량 L [kmol/h]",
        PROMPT_Y_IN => "가스 입구 몰분율 y_in",
        PROMPT_Y_OUT => "가스 출구 몰분율 y_out",
        PROMPT_X_IN => "액상 입구 몰분율 x_in",
        PROMPT_EQUILIBRIUM_SLOPE => "평형선 기울기 m",
        PROMPT_HOG => "전달단위 높이 HOG [m]",
        PROMPT_TEMPERATURE => "가스 온도 [K]",
        PROMPT_PRESSURE => "가스 압력 [Pa]",
        PROMPT_GAS_CONSTANT => "기체 상수 R [J/(kmol·K)]",
        PROMPT_TARGET_VELOCITY => "목표 가스 유속 [m/s]",
        PROMPT_PACKING_SURFACE => "충전물 비표면적 [m²/m³]",
        PROMPT_VOID_FRACTION => "충전층 공극률",
        PROMPT_BULK_DENSITY => "충전물 벌크 밀도 [kg/m³]",
        PROMPT_DP_PER_M => "단위 높이당 압력손실 [Pa/m]",
        PROMPT_ELEMENT_SIZE => "충전물 호칭 크기 d_p [m]",
        REPORT_HEADER => "\n=== 흡수 충전탑 설계 결과 ===",
        REPORT_FOOTER => "=============================",
        REPORT_GAS_FLOW => "가스 몰유량 (G):",
        REPORT_LIQUID_FLOW => "액체 몰유량 (L):",
        REPORT_VOLUMETRIC_FLOW => "가스 체적유량 (Q_G):",
        REPORT_TARGET_VELOCITY => "목표 가스 유속 (U_g):",
        REPORT_COLUMN_AREA => "탑 단면적 (A_col):",
        REPORT_COLUMN_DIAMETER => "탑 직경 (D_col):",
        REPORT_MIN_PACKING_DIAMETER => "권장 최소 충전물 크기:",
        REPORT_X_OUT => "액상 출구 몰분율 (x_out):",
        REPORT_NTU => "전달단위 수 (NTU):",
        REPORT_PACKED_HEIGHT => "충전층 높이 (Z):",
        REPORT_PACKED_VOLUME => "충전층 체적:",
        REPORT_PACKING_MASS => "충전물 질량 추정:",
        REPORT_TOTAL_DP => "압력손실 추정:",
        LINES_HEADING => "\n-- 평형선/운전선 샘플 --",
        LINES_PROMPT_COUNT => "샘플 개수 (엔터=100): ",
        LINES_TABLE_HEADER => "      x        y*(평형)    y(운전)",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 한국어  2) English",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어가 변경되었습니다:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Absorption Column Toolbox ===",
        MAIN_MENU_RUN_DESIGN => "1) Run column design",
        MAIN_MENU_EDIT_INPUTS => "2) Edit inputs",
        MAIN_MENU_LINE_TABLE => "3) Equilibrium/operating line table",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        EDIT_HEADING => "\n-- Edit Inputs --",
        EDIT_KEEP_HINT => "Press enter to keep the current value.",
        EDIT_DONE => "Inputs updated.",
        PROMPT_GAS_FLOW => "Gas molar flow G [kmol/h]",
        PROMPT_LIQUID_FLOW => "Liquid molar flow L [kmol/h]",
        PROMPT_Y_IN => "Inlet gas mole fraction y_in",
        PROMPT_Y_OUT => "Outlet gas mole fraction y_out",
        PROMPT_X_IN => "Inlet liquid mole fraction x_in",
        PROMPT_EQUILIBRIUM_SLOPE => "Equilibrium slope m",
        PROMPT_HOG => "Transfer unit height HOG [m]",
        PROMPT_TEMPERATURE => "Gas temperature [K]",
        PROMPT_PRESSURE => "Gas pressure [Pa]",
        PROMPT_GAS_CONSTANT => "Gas constant R [J/(kmol·K)]",
        PROMPT_TARGET_VELOCITY => "Target gas velocity [m/s]",
        PROMPT_PACKING_SURFACE => "Packing specific surface [m²/m³]",
        PROMPT_VOID_FRACTION => "Packing void fraction",
        PROMPT_BULK_DENSITY => "Packing bulk density [kg/m³]",
        PROMPT_DP_PER_M => "Pressure drop per height [Pa/m]",
        PROMPT_ELEMENT_SIZE => "Packing element size d_p [m]",
        REPORT_HEADER => "\n=== ABSORPTION PACKED COLUMN DESIGN ===",
        REPORT_FOOTER => "=========================================",
        REPORT_GAS_FLOW => "Gas flow rate (G):",
        REPORT_LIQUID_FLOW => "Liquid flow rate (L):",
        REPORT_VOLUMETRIC_FLOW => "Volumetric gas flow rate (Q_G):",
        REPORT_TARGET_VELOCITY => "Target gas velocity (U_g):",
        REPORT_COLUMN_AREA => "Column area (A_col):",
        REPORT_COLUMN_DIAMETER => "Column diameter (D_col):",
        REPORT_MIN_PACKING_DIAMETER => "Recommended packing diameter (min):",
        REPORT_X_OUT => "Outlet liquid mole fraction (x_out):",
        REPORT_NTU => "Number of Transfer Units (NTU):",
        REPORT_PACKED_HEIGHT => "Packed height (Z):",
        REPORT_PACKED_VOLUME => "Packed volume:",
        REPORT_PACKING_MASS => "Estimated packing mass:",
        REPORT_TOTAL_DP => "Estimated pressure drop:",
        LINES_HEADING => "\n-- Equilibrium/Operating Line Samples --",
        LINES_PROMPT_COUNT => "Sample count (enter=100): ",
        LINES_TABLE_HEADER => "      x        y*(eq)      y(op)",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) 한국어  2) English",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        _ => return None,
    })
}
