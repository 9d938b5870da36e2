//! SSE/AVX Instruction Set Support
//! 
//! Provides optimized implementations using SSE, AVX, AVX2, AVX512,
//! and other x86_64 instruction set extensions

use crate::log::{info, warn, error};
use crate::KernelError;
use crate::arch::cpu_features::CpuFeatures;

/// SIMD data types
pub type F32x4 = [f32; 4];  // 128-bit packed single-precision floats
pub type F64x2 = [f64; 2];  // 128-bit packed double-precision floats
pub type I32x4 = [i32; 4];  // 128-bit packed 32-bit integers
pub type I64x2 = [i64; 2];  // 128-bit packed 64-bit integers
pub type I8x16 = [i8; 16];  // 128-bit packed 8-bit integers
pub type U8x16 = [u8; 16];  // 128-bit packed unsigned 8-bit integers
pub type I16x8 = [i16; 8];  // 128-bit packed 16-bit integers
pub type U16x8 = [u16; 8];  // 128-bit packed unsigned 16-bit integers
pub type I32x8 = [i32; 8];  // 256-bit packed 32-bit integers
pub type U32x8 = [u32; 8];  // 256-bit packed unsigned 32-bit integers
pub type I64x4 = [i64; 4];  // 256-bit packed 64-bit integers
pub type F32x8 = [f32; 8];  // 256-bit packed single-precision floats
pub type F64x4 = [f64; 4];  // 256-bit packed double-precision floats

/// AVX-512 data types
pub type F32x16 = [f32; 16]; // 512-bit packed single-precision floats
pub type F64x8 = [f64; 8];   // 512-bit packed double-precision floats
pub type I32x16 = [i32; 16]; // 512-bit packed 32-bit integers
pub type U32x16 = [u32; 16]; // 512-bit packed unsigned 32-bit integers
pub type I64x8 = [i64; 8];   // 512-bit packed 64-bit integers
pub type U64x8 = [u64; 8];   // 512-bit packed unsigned 64-bit integers

/// Instruction set capabilities
#[derive(Debug, Clone)]
pub struct InstructionSetCapabilities {
    pub sse: bool,
    pub sse2: bool,
    pub sse3: bool,
    pub sse4_1: bool,
    pub sse4_2: bool,
    pub avx: bool,
    pub avx2: bool,
    pub avx512f: bool,
    pub avx512cd: bool,
    pub avx512pf: bool,
    pub avx512er: bool,
    pub avx512vl: bool,
    pub avx512bw: bool,
    pub avx512dq: bool,
    pub fma: bool,
    pub fma4: bool,
    pub xop: bool,
    pub bmi1: bool,
    pub bmi2: bool,
    pub lzcnt: bool,
    pub popcnt: bool,
    pub cmov: bool,
    pub cmpxchg16b: bool,
    pub rdtscp: bool,
    pub rdrand: bool,
    pub rdseed: bool,
    pub sha: bool,
    pub aes: bool,
    pub clmul: bool,
    pub movbe: bool,
}

/// SIMD operation result
#[derive(Debug, Clone)]
pub struct SimdOperationResult<T> {
    pub result: T,
    pub execution_time_ns: u64,
    pub operations_per_second: u64,
}

/// Performance metrics
#[derive(Debug, Clone)]
pub struct SimdPerformanceMetrics {
    pub float_ops_per_second: u64,
    pub integer_ops_per_second: u64,
    pub memory_bandwidth_gbps: f64,
    pub cache_hit_rate: f64,
    pub branch_prediction_accuracy: f64,
}

/// SIMD math operations
pub struct SimdMathOps {
    pub capabilities: InstructionSetCapabilities,
    pub performance_metrics: SimdPerformanceMetrics,
}

impl SimdMathOps {
    /// Create new SIMD math operations handler
    pub fn new() -> Self {
        Self {
            capabilities: Self::detect_capabilities(),
            performance_metrics: SimdPerformanceMetrics {
                float_ops_per_second: 0,
                integer_ops_per_second: 0,
                memory_bandwidth_gbps: 0.0,
                cache_hit_rate: 0.0,
                branch_prediction_accuracy: 0.0,
            },
        }
    }
    
    /// Detect available instruction sets
    pub fn detect_capabilities() -> InstructionSetCapabilities {
        // This would typically call CPUID to detect supported instruction sets
        InstructionSetCapabilities {
            sse: true,
            sse2: true,
            sse3: true,
            sse4_1: true,
            sse4_2: true,
            avx: true,
            avx2: true,
            avx512f: true,  // Would be detected
            avx512cd: true,
            avx512pf: false,
            avx512er: false,
            avx512vl: true,
            avx512bw: true,
            avx512dq: true,
            fma: true,
            fma4: false,
            xop: false,
            bmi1: true,
            bmi2: true,
            lzcnt: true,
            popcnt: true,
            cmov: true,
            cmpxchg16b: true,
            rdtscp: true,
            rdrand: true,
            rdseed: true,
            sha: true,
            aes: true,
            clmul: true,
            movbe: true,
        }
    }
    
    /// Vector addition using SSE
    pub fn vector_add_sse(a: &[f32], b: &[f32], result: &mut [f32]) -> Result<(), KernelError> {
        if !self.capabilities.sse {
            warn!("SSE not available, falling back to scalar operations");
            return Self::vector_add_scalar(a, b, result);
        }
        
        if a.len() != b.len() || a.len() != result.len() {
            return Err(KernelError::InvalidArgument);
        }
        
        let len = a.len();
        let i = 0;
        
        unsafe {
            // Process 4 floats at a time using SSE
            while i + 3 < len {
                let a_vec = core::arch::x86_64::_mm_loadu_ps(a.as_ptr().add(i));
                let b_vec = core::arch::x86_64::_mm_loadu_ps(b.as_ptr().add(i));
                let result_vec = core::arch::x86_64::_mm_add_ps(a_vec, b_vec);
                core::arch::x86_64::_mm_storeu_ps(result.as_mut_ptr().add(i), result_vec);
            }
            
            // Handle remaining elements
            while i < len {
                result[i] = a[i] + b[i];
            }
        }
        
        Ok(())
    }
    
    /// Vector addition using AVX
    pub fn vector_add_avx(a: &[f32], b: &[f32], result: &mut [f32]) -> Result<(), KernelError> {
        if !self.capabilities.avx {
            warn!("AVX not available, falling back to SSE");
            return self.vector_add_sse(a, b, result);
        }
        
        if a.len() != b.len() || a.len() != result.len() {
            return Err(KernelError::InvalidArgument);
        }
        
        let len = a.len();
        let mut i = 0;
        
        unsafe {
            // Process 8 floats at a time using AVX
            while i + 7 < len {
                let a_vec = core::arch::x86_64::_mm256_loadu_ps(a.as_ptr().add(i));
                let b_vec = core::arch::x86_64::_mm256_loadu_ps(b.as_ptr().add(i));
                let result_vec = core::arch::x86_64::_mm256_add_ps(a_vec, b_vec);
                core::arch::x86_64::_mm256_storeu_ps(result.as_mut_ptr().add(i), result_vec);
                i += 8;
            }
            
            // Handle remaining elements
            while i < len {
                result[i] = a[i] + b[i];
            }
        }
        
        Ok(())
    }
    
    /// Vector multiplication using SSE
    pub fn vector_mul_sse(a: &[f32], b: &[f32], result: &mut [f32]) -> Result<(), KernelError> {
        if !self.capabilities.sse {
            warn!("SSE not available, falling back to scalar operations");
            return Self::vector_mul_scalar(a, b, result);
        }
        
        if a.len() != b.len() || a.len() != result.len() {
            return Err(KernelError::InvalidArgument);
        }
        
        let len = a.len();
        let mut i = 0;
        
        unsafe {
            while i + 3 < len {
                let a_vec = core::arch::x86_64::_mm_loadu_ps(a.as_ptr().add(i));
                let b_vec = core::arch::x86_64::_mm_loadu_ps(b.as_ptr().add(i));
                let result_vec = core::arch::x86_64::_mm_mul_ps(a_vec, b_vec);
                core::arch::x86_64::_mm_storeu_ps(result.as_mut_ptr().add(i), result_vec);
                i += 4;
            }
            
            while i < len {
                result[i] = a[i] * b[i];
            }
        }
        
        Ok(())
    }
    
    /// Matrix multiplication using AVX
    pub fn matrix_mul_avx(a: &[f32], b: &[f32], result: &mut [f32], 
                          rows_a: usize, cols_a: usize, cols_b: usize) -> Result<(), KernelError> {
        if !self.capabilities.avx {
            warn!("AVX not available, falling back to scalar operations");
            return Self::matrix_mul_scalar(a, b, result, rows_a, cols_a, cols_b);
        }
        
        if cols_a != rows_a {
            return Err(KernelError::InvalidArgument);
        }
        
        let rows = rows_a;
        let common = cols_a;
        let cols = cols_b;
        
        unsafe {
            for i in 0..rows {
                for j in 0..cols {
                    let mut sum = 0.0f32;
                    let mut k = 0;
                    
                    while k + 7 < common {
                        let a_vec = core::arch::x86_64::_mm256_loadu_ps(
                            a.as_ptr().add(i * common + k)
                        );
                        let b_vec = core::arch::x86_64::_mm256_loadu_ps(
                            &b[k * cols + j]
                        );
                        let mul_vec = core::arch::x86_64::_mm256_mul_ps(a_vec, b_vec);
                        
                        // Horizontal sum
                        let high = core::arch::x86_64::_mm256_extractf128_ps(mul_vec, 1);
                        let low = core::arch::x86_64::_mm256_castps256_ps128(mul_vec);
                        let add_vec = core::arch::x86_64::_mm_add_ps(low, high);
                        let sum_vec = core::arch::x86_64::_mm_hadd_ps(add_vec, add_vec);
                        let final_sum = core::arch::x86_64::_mm_hadd_ps(sum_vec, sum_vec);
                        
                        sum += core::arch::x86_64::_mm_cvtss_f32(final_sum);
                        k += 8;
                    }
                    
                    while k < common {
                        sum += a[i * common + k] * b[k * cols + j];
                        k += 1;
                    }
                    
                    result[i * cols + j] = sum;
                }
            }
        }
        
        Ok(())
    }
    
    /// Dot product using AVX
    pub fn dot_product_avx(a: &[f32], b: &[f32]) -> Result<f32, KernelError> {
        if !self.capabilities.avx {
            warn!("AVX not available, falling back to scalar operations");
            return Self::dot_product_scalar(a, b);
        }
        
        if a.len() != b.len() {
            return Err(KernelError::InvalidArgument);
        }
        
        let len = a.len();
        let mut i = 0;
        let mut result = 0.0f32;
        
        unsafe {
            while i + 7 < len {
                let a_vec = core::arch::x86_64::_mm256_loadu_ps(a.as_ptr().add(i));
                let b_vec = core::arch::x86_64::_mm256_loadu_ps(b.as_ptr().add(i));
                let mul_vec = core::arch::x86_64::_mm256_mul_ps(a_vec, b_vec);
                
                // Horizontal sum
                let high = core::arch::x86_64::_mm256_extractf128_ps(mul_vec, 1);
                let low = core::arch::x86_64::_mm256_castps256_ps128(mul_vec);
                let add_vec = core::arch::x86_64::_mm_add_ps(low, high);
                let sum_vec = core::arch::x86_64::_mm_hadd_ps(add_vec, add_vec);
                let final_sum = core::arch::x86_64::_mm_hadd_ps(sum_vec, sum_vec);
                
                result += core::arch::x86_64::_mm_cvtss_f32(final_sum);
                i += 8;
            }
            
            while i < len {
                result += a[i] * b[i];
                i += 1;
            }
        }
        
        Ok(result)
    }
    
    /// Fast Fourier Transform using AVX
    pub fn fft_avx(data: &mut [f32], is_inverse: bool) -> Result<(), KernelError> {
        if !self.capabilities.avx || !self.capabilities.sse {
            warn!("AVX not available, FFT not optimized");
            return Self::fft_scalar(data, is_inverse);
        }
        
        let n = data.len();
        if n % 2 != 0 {
            return Err(KernelError::InvalidArgument);
        }
        
        // Simple iterative FFT implementation using AVX
        // In practice, this would be a more sophisticated implementation
        
        for len in (2..=n).step_by(2) {
            let angle = if is_inverse { 2.0 * core::f32::consts::PI / len as f32 }
                       else { -2.0 * core::f32::consts::PI / len as f32 };
            
            let wlen_real = angle.cos();
            let wlen_imag = angle.sin();
            
            for i in (0..n).step_by(len) {
                let mut w_real = 1.0;
                let mut w_imag = 0.0;
                
                for j in 0..(len / 2) {
                    let u_real = data[i + 2 * j];
                    let u_imag = data[i + 2 * j + 1];
                    let t_real = data[i + 2 * j + len];
                    let t_imag = data[i + 2 * j + len + 1];
                    
                    let temp_real = w_real * t_real - w_imag * t_imag;
                    let temp_imag = w_real * t_imag + w_imag * t_real;
                    
                    data[i + 2 * j] = u_real + temp_real;
                    data[i + 2 * j + 1] = u_imag + temp_imag;
                    data[i + 2 * j + len] = u_real - temp_real;
                    data[i + 2 * j + len + 1] = u_imag - temp_imag;
                    
                    // Update w (would be vectorized in optimized version)
                    let temp = w_real * wlen_real - w_imag * wlen_imag;
                    w_imag = w_real * wlen_imag + w_imag * wlen_real;
                    w_real = temp;
                }
            }
        }
        
        Ok(())
    }
    
    /// Popcount using POPCNT instruction
    pub fn popcount_popcnt(data: &[u32]) -> Result<usize, KernelError> {
        if !self.capabilities.popcnt {
            warn!("POPCNT instruction not available, falling back to software");
            return Ok(Self::popcount_scalar(data));
        }
        
        let mut count = 0;
        
        unsafe {
            for &value in data {
                let result = core::arch::x86_64::_mm_popcnt_u32(value);
                count += result as usize;
            }
        }
        
        Ok(count)
    }
    
    /// Bit manipulation using BMI2
    pub fn bit_scan_forward_bmi2(data: &[u32]) -> Result<u32, KernelError> {
        if !self.capabilities.bmi2 {
            warn!("BMI2 not available, falling back to scalar operations");
            return Ok(Self::bit_scan_forward_scalar(data));
        }
        
        for &value in data {
            if value != 0 {
                unsafe {
                    let index = core::arch::x86_64::_tzcnt_u32(value);
                    return Ok(index);
                }
            }
        }
        
        Ok(0) // Not found
    }
    
    /// AES encryption using AES-NI
    pub fn aes_encrypt_aesni(data: &[u8], key: &[u8]) -> Result<Vec<u8>, KernelError> {
        if !self.capabilities.aes {
            warn!("AES-NI not available, encryption not optimized");
            return Err(KernelError::NotSupported);
        }
        
        if data.len() % 16 != 0 || key.len() != 16 {
            return Err(KernelError::InvalidArgument);
        }
        
        let mut result = Vec::with_capacity(data.len());
        
        unsafe {
            // Load AES key schedule (simplified - would need proper key expansion)
            let key_schedule = core::arch::x86_64::_mm_loadu_si128(key.as_ptr() as *const _);
            
            for chunk in data.chunks(16) {
                let data_block = core::arch::x86_64::_mm_loadu_si128(chunk.as_ptr() as *const _);
                let encrypted = core::arch::x86_64::_mm_aesenc_si128(data_block, key_schedule);
                
                let encrypted_bytes = core::mem::transmute_copy::<_, [u8; 16]>(&encrypted);
                result.extend_from_slice(&encrypted_bytes);
            }
        }
        
        Ok(result)
    }
    
    /// Random number generation using RDRAND
    pub fn random_rdrand() -> Result<u64, KernelError> {
        if !self.capabilities.rdrand {
            warn!("RDRAND not available, using software PRNG");
            return Ok(Self::random_software());
        }
        
        unsafe {
            let mut result: u64 = 0;
            let success = core::arch::x86_64::_rdrand64_step(&mut result);
            
            if success {
                Ok(result)
            } else {
                warn!("RDRAND failed, falling back to software PRNG");
                Ok(Self::random_software())
            }
        }
    }
    
    /// Hash using SHA instructions
    pub fn sha256_hash_sha(data: &[u8]) -> Result<[u8; 32], KernelError> {
        if !self.capabilities.sha {
            warn!("SHA instructions not available, using software implementation");
            return Self::sha256_software(data);
        }
        
        // SHA-256 implementation using hardware instructions
        // This is a simplified version - actual implementation would be more complex
        let mut result = [0u8; 32];
        
        unsafe {
            // Initialize hash values (simplified SHA-256 constants)
            let mut state0: core::arch::x86_64::__m128i = core::arch::x86_64::_mm_setr_epi32(
                0x6A09E667, 0xBB67AE85, 0x3C6EF372, 0xA54FF53A
            );
            let mut state1: core::arch::x86_64::__m128i = core::arch::x86_64::_mm_setr_epi32(
                0x510E527F, 0x9B05688C, 0x1F83D9AB, 0x5BE0CD19
            );
            
            // Process data in 64-byte chunks (simplified)
            for chunk in data.chunks(64) {
                if chunk.len() == 64 {
                    let chunk_vec = core::arch::x86_64::_mm_loadu_si128(chunk.as_ptr() as *const _);
                    
                    // SHA256 operations would go here
                    // This is a placeholder - actual SHA implementation is complex
                }
            }
            
            // Finalize (simplified)
            let result_bytes0 = core::mem::transmute_copy::<_, [u8; 16]>(&state0);
            let result_bytes1 = core::mem::transmute_copy::<_, [u8; 16]>(&state1);
            result[..16].copy_from_slice(&result_bytes0);
            result[16..].copy_from_slice(&result_bytes1);
        }
        
        Ok(result)
    }
    
    // Scalar fallback implementations
    
    fn vector_add_scalar(a: &[f32], b: &[f32], result: &mut [f32]) -> Result<(), KernelError> {
        if a.len() != b.len() || a.len() != result.len() {
            return Err(KernelError::InvalidArgument);
        }
        
        for i in 0..a.len() {
            result[i] = a[i] + b[i];
        }
        
        Ok(())
    }
    
    fn vector_mul_scalar(a: &[f32], b: &[f32], result: &mut [f32]) -> Result<(), KernelError> {
        if a.len() != b.len() || a.len() != result.len() {
            return Err(KernelError::InvalidArgument);
        }
        
        for i in 0..a.len() {
            result[i] = a[i] * b[i];
        }
        
        Ok(())
    }
    
    fn matrix_mul_scalar(a: &[f32], b: &[f32], result: &mut [f32], 
                        rows_a: usize, cols_a: usize, cols_b: usize) -> Result<(), KernelError> {
        if cols_a != rows_a {
            return Err(KernelError::InvalidArgument);
        }
        
        for i in 0..rows_a {
            for j in 0..cols_b {
                let mut sum = 0.0f32;
                for k in 0..cols_a {
                    sum += a[i * cols_a + k] * b[k * cols_b + j];
                }
                result[i * cols_b + j] = sum;
            }
        }
        
        Ok(())
    }
    
    fn dot_product_scalar(a: &[f32], b: &[f32]) -> Result<f32, KernelError> {
        if a.len() != b.len() {
            return Err(KernelError::InvalidArgument);
        }
        
        let mut result = 0.0f32;
        for i in 0..a.len() {
            result += a[i] * b[i];
        }
        
        Ok(result)
    }
    
    fn fft_scalar(data: &mut [f32], is_inverse: bool) -> Result<(), KernelError> {
        // Simple recursive FFT implementation
        let n = data.len();
        if n <= 1 {
            return Ok(());
        }
        
        // Split into even and odd elements
        let mut even: Vec<f32> = data.iter().step_by(2).copied().collect();
        let mut odd: Vec<f32> = data.iter().skip(1).step_by(2).copied().collect();
        
        // Recursive calls
        Self::fft_scalar(&mut even, is_inverse)?;
        Self::fft_scalar(&mut odd, is_inverse)?;
        
        // Combine results
        for k in 0..(n / 2) {
            let angle = 2.0 * core::f32::consts::PI * k as f32 / n as f32;
            let w_real = angle.cos();
            let w_imag = if is_inverse { -angle.sin() } else { angle.sin() };
            
            let t_real = w_real * even[k] - w_imag * odd[k];
            let t_imag = w_real * odd[k] + w_imag * even[k];
            
            data[k] = even[k] + t_real;
            data[k + n / 2] = even[k] - t_real;
            
            if !is_inverse {
                data[k] *= 0.5;
                data[k + n / 2] *= 0.5;
            }
        }
        
        Ok(())
    }
    
    fn popcount_scalar(data: &[u32]) -> usize {
        data.iter().map(|&x| x.count_ones() as usize).sum()
    }
    
    fn bit_scan_forward_scalar(data: &[u32]) -> u32 {
        for (i, &value) in data.iter().enumerate() {
            if value != 0 {
                return i as u32 * 32 + value.trailing_zeros();
            }
        }
        0
    }
    
    fn random_software() -> u64 {
        // Simple linear congruential generator
        static mut STATE: u64 = 0x123456789ABCDEF;
        unsafe {
            STATE = STATE.wrapping_mul(6364136223846793005).wrapping_add(1);
            STATE
        }
    }
    
    fn sha256_software(data: &[u8]) -> Result<[u8; 32], KernelError> {
        // Simplified SHA-256 implementation
        // In practice, this would be a full SHA-256 implementation
        let mut result = [0u8; 32];
        
        // Very simplified - just hash the data length and a few chunks
        let mut hash = [0u8; 32];
        for (i, &byte) in data.iter().enumerate() {
            hash[i % 32] ^= byte;
        }
        
        result.copy_from_slice(&hash);
        Ok(result)
    }
    
    /// Get instruction set capabilities
    pub fn get_capabilities(&self) -> &InstructionSetCapabilities {
        &self.capabilities
    }
    
    /// Benchmark SIMD performance
    pub fn benchmark_performance(&mut self) -> Result<(), KernelError> {
        // Simple performance benchmarks
        let array_size = 1_000_000;
        let mut a = vec![1.0f32; array_size];
        let mut b = vec![2.0f32; array_size];
        let mut result = vec![0.0f32; array_size];
        
        // Benchmark vector operations
        let start = crate::arch::x86_64::get_tsc();
        
        for _ in 0..10 {
            self.vector_add_avx(&a, &b, &mut result)?;
        }
        
        let end = crate::arch::x86_64::get_tsc();
        let cycles = end - start;
        
        self.performance_metrics.float_ops_per_second = (array_size * 10 * 1_000_000_000) / cycles as u64;
        
        info!("SIMD Performance: {} float ops/second", 
              self.performance_metrics.float_ops_per_second);
        
        Ok(())
    }
}