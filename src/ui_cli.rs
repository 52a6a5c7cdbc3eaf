use std::io::{self, Write};

use crate::absorber::{self, DEFAULT_SAMPLES};
use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::report;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RunDesign,
    EditInputs,
    LineTable,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_RUN_DESIGN));
    println!("{}", tr.t(keys::MAIN_MENU_EDIT_INPUTS));
    println!("{}", tr.t(keys::MAIN_MENU_LINE_TABLE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::RunDesign),
            "2" => return Ok(MenuChoice::EditInputs),
            "3" => return Ok(MenuChoice::LineTable),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 현재 입력값으로 설계를 수행하고 보고서를 출력한다.
pub fn handle_run_design(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    match absorber::design_column(&cfg.design) {
        Ok(result) => {
            for line in report::report_lines(&cfg.design, &result, tr) {
                println!("{line}");
            }
        }
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 입력값 편집 메뉴를 처리한다. 엔터만 누르면 기존 값을 유지한다.
pub fn handle_edit_inputs(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::EDIT_HEADING));
    println!("{}", tr.t(keys::EDIT_KEEP_HINT));

    let d = &mut cfg.design;
    d.gas_flow_kmol_per_h = read_f64_default(tr, keys::PROMPT_GAS_FLOW, d.gas_flow_kmol_per_h)?;
    d.liquid_flow_kmol_per_h =
        read_f64_default(tr, keys::PROMPT_LIQUID_FLOW, d.liquid_flow_kmol_per_h)?;
    d.y_in = read_f64_default(tr, keys::PROMPT_Y_IN, d.y_in)?;
    d.y_out = read_f64_default(tr, keys::PROMPT_Y_OUT, d.y_out)?;
    d.x_in = read_f64_default(tr, keys::PROMPT_X_IN, d.x_in)?;
    d.equilibrium_slope =
        read_f64_default(tr, keys::PROMPT_EQUILIBRIUM_SLOPE, d.equilibrium_slope)?;
    d.hog_m = read_f64_default(tr, keys::PROMPT_HOG, d.hog_m)?;
    d.temperature_k = read_f64_default(tr, keys::PROMPT_TEMPERATURE, d.temperature_k)?;
    d.pressure_pa = read_f64_default(tr, keys::PROMPT_PRESSURE, d.pressure_pa)?;
    d.gas_constant_j_per_kmol_k =
        read_f64_default(tr, keys::PROMPT_GAS_CONSTANT, d.gas_constant_j_per_kmol_k)?;
    d.target_velocity_m_per_s =
        read_f64_default(tr, keys::PROMPT_TARGET_VELOCITY, d.target_velocity_m_per_s)?;
    d.packing_surface_m2_per_m3 =
        read_f64_default(tr, keys::PROMPT_PACKING_SURFACE, d.packing_surface_m2_per_m3)?;
    d.packing_void_fraction =
        read_f64_default(tr, keys::PROMPT_VOID_FRACTION, d.packing_void_fraction)?;
    d.packing_bulk_density_kg_per_m3 = read_f64_default(
        tr,
        keys::PROMPT_BULK_DENSITY,
        d.packing_bulk_density_kg_per_m3,
    )?;
    d.packing_dp_pa_per_m = read_f64_default(tr, keys::PROMPT_DP_PER_M, d.packing_dp_pa_per_m)?;
    d.packing_element_size_m =
        read_f64_default(tr, keys::PROMPT_ELEMENT_SIZE, d.packing_element_size_m)?;

    println!("{}", tr.t(keys::EDIT_DONE));
    Ok(())
}

/// 평형선/운전선 샘플 표를 출력한다.
pub fn handle_line_table(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::LINES_HEADING));
    let count = read_usize_default(tr, keys::LINES_PROMPT_COUNT, DEFAULT_SAMPLES)?;
    match absorber::sample_design_lines(&cfg.design, count) {
        Ok(samples) => {
            println!("{}", tr.t(keys::LINES_TABLE_HEADER));
            for s in samples {
                println!(
                    "{:>9.5}  {:>9.5}  {:>9.5}",
                    s.x, s.y_equilibrium, s.y_operating
                );
            }
        }
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match sel.trim() {
        "1" => cfg.language = "ko".to_string(),
        "2" => cfg.language = "en-us".to_string(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 프롬프트에 현재 값을 보여주고 새 값을 읽는다. 빈 입력은 현재 값을 유지한다.
fn read_f64_default(tr: &Translator, prompt_key: &str, current: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{} [{current}]: ", tr.t(prompt_key)))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(current);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_usize_default(tr: &Translator, prompt_key: &str, default: usize) -> Result<usize, AppError> {
    loop {
        let s = read_line(tr.t(prompt_key))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<usize>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
