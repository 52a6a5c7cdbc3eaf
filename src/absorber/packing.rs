/// 충전물 사이징 입력값.
#[derive(Debug, Clone)]
pub struct PackingSizingInput {
    pub column_area_m2: f64,
    pub packed_height_m: f64,
    pub column_diameter_m: f64,
    /// 충전물 벌크 밀도 [kg/m³]
    pub bulk_density_kg_per_m3: f64,
    /// 단위 높이당 압력손실 [Pa/m]
    pub pressure_drop_pa_per_m: f64,
    /// 충전물 호칭 크기 d_p [m]
    pub element_size_m: f64,
}

/// 충전물 사이징 결과.
#[derive(Debug, Clone, Copy)]
pub struct PackingSizingResult {
    pub packed_volume_m3: f64,
    pub packing_mass_kg: f64,
    pub total_pressure_drop_pa: f64,
    pub min_packing_diameter_m: f64,
}

/// 충전층 체적/질량/총 압력손실과 권장 최소 충전물 크기를 계산한다.
pub fn size_packing(input: PackingSizingInput) -> PackingSizingResult {
    let packed_volume_m3 = input.column_area_m2 * input.packed_height_m;
    let packing_mass_kg = packed_volume_m3 * input.bulk_density_kg_per_m3;
    let total_pressure_drop_pa = input.packed_height_m * input.pressure_drop_pa_per_m;

    // 제작 하한(5·d_p)과 벽면 효과 기준(0.1·D) 중 큰 값을 권장한다.
    let min_packing_diameter_m =
        (5.0 * input.element_size_m).max(0.1 * input.column_diameter_m);

    PackingSizingResult {
        packed_volume_m3,
        packing_mass_kg,
        total_pressure_drop_pa,
        min_packing_diameter_m,
    }
}
