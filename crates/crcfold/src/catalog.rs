//! The predefined catalogue.
//!
//! Parameters are taken from the catalogue of parametrised CRC algorithms
//! and the CRC polynomial zoo; the trailing comment on each entry records
//! its attestation level there. Each alias is `Crc<width, poly, init,
//! refin, refout, xorout>`; declaring one does no work until it is first
//! processed.
//!
//! The single-bit parity CRC is not included.

use crate::crc::Crc;

/// CRC-3/GSM.
pub type Crc3Gsm = Crc<3, 0x3, 0x0, false, false, 0x7>; // academic
/// CRC-3/ROHC.
pub type Crc3Rohc = Crc<3, 0x3, 0x7, true, true, 0x0>; // academic
/// CRC-4/G-704.
pub type Crc4G704 = Crc<4, 0x3, 0x0, true, true, 0x0>; // academic
/// CRC-4/INTERLAKEN.
pub type Crc4Interlaken = Crc<4, 0x3, 0xF, false, false, 0xF>; // academic
/// CRC-5/EPC-C1G2.
pub type Crc5EpcC1g2 = Crc<5, 0x09, 0x09, false, false, 0x00>; // attested
/// CRC-5/G-704.
pub type Crc5G704 = Crc<5, 0x15, 0x00, true, true, 0x00>; // academic
/// CRC-5/USB.
pub type Crc5Usb = Crc<5, 0x05, 0x1F, true, true, 0x1F>; // confirmed
/// CRC-6/CDMA2000-A.
pub type Crc6Cdma2000A = Crc<6, 0x27, 0x3F, false, false, 0x00>; // attested
/// CRC-6/CDMA2000-B.
pub type Crc6Cdma2000B = Crc<6, 0x07, 0x3F, false, false, 0x00>; // academic
/// CRC-6/DARC.
pub type Crc6Darc = Crc<6, 0x19, 0x00, true, true, 0x00>; // attested
/// CRC-6/G-704.
pub type Crc6G704 = Crc<6, 0x03, 0x00, true, true, 0x00>; // academic
/// CRC-6/GSM.
pub type Crc6Gsm = Crc<6, 0x2F, 0x00, false, false, 0x3F>; // academic
/// CRC-7/MMC.
pub type Crc7Mmc = Crc<7, 0x09, 0x00, false, false, 0x00>; // academic
/// CRC-7/ROHC.
pub type Crc7Rohc = Crc<7, 0x4F, 0x7F, true, true, 0x00>; // academic
/// CRC-7/UMTS.
pub type Crc7Umts = Crc<7, 0x45, 0x00, false, false, 0x00>; // academic
/// CRC-8/AUTOSAR.
pub type Crc8Autosar = Crc<8, 0x2F, 0xFF, false, false, 0xFF>; // attested
/// CRC-8/BLUETOOTH.
pub type Crc8Bluetooth = Crc<8, 0xA7, 0x00, true, true, 0x00>; // attested
/// CRC-8/CDMA2000.
pub type Crc8Cdma2000 = Crc<8, 0x9B, 0xFF, false, false, 0x00>; // academic
/// CRC-8/DARC.
pub type Crc8Darc = Crc<8, 0x39, 0x00, true, true, 0x00>; // attested
/// CRC-8/DVB-S2.
pub type Crc8DvbS2 = Crc<8, 0xD5, 0x00, false, false, 0x00>; // academic
/// CRC-8/GSM-A.
pub type Crc8GsmA = Crc<8, 0x1D, 0x00, false, false, 0x00>; // academic
/// CRC-8/GSM-B.
pub type Crc8GsmB = Crc<8, 0x49, 0x00, false, false, 0xFF>; // academic
/// CRC-8/HITAG.
pub type Crc8Hitag = Crc<8, 0x1D, 0xFF, false, false, 0x00>; // attested
/// CRC-8/I-432-1.
pub type Crc8I4321 = Crc<8, 0x07, 0x00, false, false, 0x55>; // academic
/// CRC-8/I-CODE.
pub type Crc8ICode = Crc<8, 0x1D, 0xFD, false, false, 0x00>; // attested
/// CRC-8/LTE.
pub type Crc8Lte = Crc<8, 0x9B, 0x00, false, false, 0x00>; // academic
/// CRC-8/MAXIM-DOW.
pub type Crc8MaximDow = Crc<8, 0x31, 0x00, true, true, 0x00>; // attested
/// CRC-8/MIFARE-MAD.
pub type Crc8MifareMad = Crc<8, 0x1D, 0xC7, false, false, 0x00>; // attested
/// CRC-8/NRSC-5.
pub type Crc8Nrsc5 = Crc<8, 0x31, 0xFF, false, false, 0x00>; // attested
/// CRC-8/OPENSAFETY.
pub type Crc8Opensafety = Crc<8, 0x2F, 0x00, false, false, 0x00>; // attested
/// CRC-8/ROHC.
pub type Crc8Rohc = Crc<8, 0x07, 0xFF, true, true, 0x00>; // academic
/// CRC-8/SAE-J1850.
pub type Crc8SaeJ1850 = Crc<8, 0x1D, 0xFF, false, false, 0xFF>; // attested
/// CRC-8/SMBUS.
pub type Crc8Smbus = Crc<8, 0x07, 0x00, false, false, 0x00>; // attested
/// CRC-8/TECH-3250.
pub type Crc8Tech3250 = Crc<8, 0x1D, 0xFF, true, true, 0x00>; // attested
/// CRC-8/WCDMA.
pub type Crc8Wcdma = Crc<8, 0x9B, 0x00, true, true, 0x00>; // third party
/// CRC-10/ATM.
pub type Crc10Atm = Crc<10, 0x233, 0x000, false, false, 0x000>; // attested
/// CRC-10/CDMA2000.
pub type Crc10Cdma2000 = Crc<10, 0x3D9, 0x3FF, false, false, 0x000>; // academic
/// CRC-10/GSM.
pub type Crc10Gsm = Crc<10, 0x175, 0x000, false, false, 0x3FF>; // academic
/// CRC-11/FLEXRAY.
pub type Crc11Flexray = Crc<11, 0x385, 0x01A, false, false, 0x000>; // attested
/// CRC-11/UMTS.
pub type Crc11Umts = Crc<11, 0x307, 0x000, false, false, 0x000>; // academic
/// CRC-12/CDMA2000.
pub type Crc12Cdma2000 = Crc<12, 0xF13, 0xFFF, false, false, 0x000>; // academic
/// CRC-12/DECT.
pub type Crc12Dect = Crc<12, 0x80F, 0x000, false, false, 0x000>; // academic
/// CRC-12/GSM.
pub type Crc12Gsm = Crc<12, 0xD31, 0x000, false, false, 0xFFF>; // academic
/// CRC-12/UMTS.
pub type Crc12Umts = Crc<12, 0x80F, 0x000, false, true, 0x000>; // academic
/// CRC-13/BBC.
pub type Crc13Bbc = Crc<13, 0x1CF5, 0x0000, false, false, 0x0000>; // attested
/// CRC-14/DARC.
pub type Crc14Darc = Crc<14, 0x0805, 0x0000, true, true, 0x0000>; // attested
/// CRC-14/GSM.
pub type Crc14Gsm = Crc<14, 0x202D, 0x0000, false, false, 0x3FFF>; // academic
/// CRC-15/CAN.
pub type Crc15Can = Crc<15, 0x4599, 0x0000, false, false, 0x0000>; // academic
/// CRC-15/MPT1327.
pub type Crc15Mpt1327 = Crc<15, 0x6815, 0x0000, false, false, 0x0001>; // attested
/// CRC-16/ARC.
pub type Crc16Arc = Crc<16, 0x8005, 0x0000, true, true, 0x0000>; // attested
/// CRC-16/CDMA2000.
pub type Crc16Cdma2000 = Crc<16, 0xC867, 0xFFFF, false, false, 0x0000>; // academic
/// CRC-16/CMS.
pub type Crc16Cms = Crc<16, 0x8005, 0xFFFF, false, false, 0x0000>; // third party
/// CRC-16/DDS-110.
pub type Crc16Dds110 = Crc<16, 0x8005, 0x800D, false, false, 0x0000>; // attested
/// CRC-16/DECT-R.
pub type Crc16DectR = Crc<16, 0x0589, 0x0000, false, false, 0x0001>; // attested
/// CRC-16/DECT-X.
pub type Crc16DectX = Crc<16, 0x0589, 0x0000, false, false, 0x0000>; // attested
/// CRC-16/DNP.
pub type Crc16Dnp = Crc<16, 0x3D65, 0x0000, true, true, 0xFFFF>; // confirmed
/// CRC-16/EN-13757.
pub type Crc16En13757 = Crc<16, 0x3D65, 0x0000, false, false, 0xFFFF>; // confirmed
/// CRC-16/GENIBUS.
pub type Crc16Genibus = Crc<16, 0x1021, 0xFFFF, false, false, 0xFFFF>; // attested
/// CRC-16/GSM.
pub type Crc16Gsm = Crc<16, 0x1021, 0x0000, false, false, 0xFFFF>; // attested
/// CRC-16/IBM-3740.
pub type Crc16Ibm3740 = Crc<16, 0x1021, 0xFFFF, false, false, 0x0000>; // attested
/// CRC-16/IBM-SDLC.
pub type Crc16IbmSdlc = Crc<16, 0x1021, 0xFFFF, true, true, 0xFFFF>; // attested
/// CRC-16/ISO-IEC-14443-3-A.
pub type Crc16IsoIec144433A = Crc<16, 0x1021, 0xC6C6, true, true, 0x0000>; // attested
/// CRC-16/KERMIT.
pub type Crc16Kermit = Crc<16, 0x1021, 0x0000, true, true, 0x0000>; // attested
/// CRC-16/LJ1200.
pub type Crc16Lj1200 = Crc<16, 0x6F63, 0x0000, false, false, 0x0000>; // third party
/// CRC-16/M17.
pub type Crc16M17 = Crc<16, 0x5935, 0xFFFF, false, false, 0x0000>; // attested
/// CRC-16/MAXIM-DOW.
pub type Crc16MaximDow = Crc<16, 0x8005, 0x0000, true, true, 0xFFFF>; // attested
/// CRC-16/MCRF4XX.
pub type Crc16Mcrf4xx = Crc<16, 0x1021, 0xFFFF, true, true, 0x0000>; // attested
/// CRC-16/MODBUS.
pub type Crc16Modbus = Crc<16, 0x8005, 0xFFFF, true, true, 0x0000>; // attested
/// CRC-16/NRSC-5.
pub type Crc16Nrsc5 = Crc<16, 0x080B, 0xFFFF, true, true, 0x0000>; // attested
/// CRC-16/OPENSAFETY-A.
pub type Crc16OpensafetyA = Crc<16, 0x5935, 0x0000, false, false, 0x0000>; // attested
/// CRC-16/OPENSAFETY-B.
pub type Crc16OpensafetyB = Crc<16, 0x755B, 0x0000, false, false, 0x0000>; // attested
/// CRC-16/PROFIBUS.
pub type Crc16Profibus = Crc<16, 0x1DCF, 0xFFFF, false, false, 0xFFFF>; // attested
/// CRC-16/RIELLO.
pub type Crc16Riello = Crc<16, 0x1021, 0xB2AA, true, true, 0x0000>; // third party
/// CRC-16/SPI-FUJITSU.
pub type Crc16SpiFujitsu = Crc<16, 0x1021, 0x1D0F, false, false, 0x0000>; // attested
/// CRC-16/T10-DIF.
pub type Crc16T10Dif = Crc<16, 0x8BB7, 0x0000, false, false, 0x0000>; // attested
/// CRC-16/TELEDISK.
pub type Crc16Teledisk = Crc<16, 0xA097, 0x0000, false, false, 0x0000>; // confirmed
/// CRC-16/TMS37157.
pub type Crc16Tms37157 = Crc<16, 0x1021, 0x89EC, true, true, 0x0000>; // attested
/// CRC-16/UMTS.
pub type Crc16Umts = Crc<16, 0x8005, 0x0000, false, false, 0x0000>; // attested
/// CRC-16/USB.
pub type Crc16Usb = Crc<16, 0x8005, 0xFFFF, true, true, 0xFFFF>; // confirmed
/// CRC-16/XMODEM.
pub type Crc16Xmodem = Crc<16, 0x1021, 0x0000, false, false, 0x0000>; // attested
/// CRC-17/CAN-FD.
pub type Crc17CanFd = Crc<17, 0x1685B, 0x00000, false, false, 0x00000>; // academic
/// CRC-21/CAN-FD.
pub type Crc21CanFd = Crc<21, 0x102899, 0x000000, false, false, 0x000000>; // academic
/// CRC-24/BLE.
pub type Crc24Ble = Crc<24, 0x00065B, 0x555555, true, true, 0x000000>; // attested
/// CRC-24/FLEXRAY-A.
pub type Crc24FlexrayA = Crc<24, 0x5D6DCB, 0xFEDCBA, false, false, 0x000000>; // attested
/// CRC-24/FLEXRAY-B.
pub type Crc24FlexrayB = Crc<24, 0x5D6DCB, 0xABCDEF, false, false, 0x000000>; // attested
/// CRC-24/INTERLAKEN.
pub type Crc24Interlaken = Crc<24, 0x328B63, 0xFFFFFF, false, false, 0xFFFFFF>; // academic
/// CRC-24/LTE-A.
pub type Crc24LteA = Crc<24, 0x864CFB, 0x000000, false, false, 0x000000>; // academic
/// CRC-24/LTE-B.
pub type Crc24LteB = Crc<24, 0x800063, 0x000000, false, false, 0x000000>; // academic
/// CRC-24/OPENPGP.
pub type Crc24Openpgp = Crc<24, 0x864CFB, 0xB704CE, false, false, 0x000000>; // attested
/// CRC-24/OS-9.
pub type Crc24Os9 = Crc<24, 0x800063, 0xFFFFFF, false, false, 0xFFFFFF>; // attested
/// CRC-30/CDMA.
pub type Crc30Cdma = Crc<30, 0x2030B9C7, 0x3FFFFFFF, false, false, 0x3FFFFFFF>; // academic
/// CRC-31/PHILIPS.
pub type Crc31Philips = Crc<31, 0x04C11DB7, 0x7FFFFFFF, false, false, 0x7FFFFFFF>; // confirmed
/// CRC-32/AIXM.
pub type Crc32Aixm = Crc<32, 0x814141AB, 0x00000000, false, false, 0x00000000>; // attested
/// CRC-32/AUTOSAR.
pub type Crc32Autosar = Crc<32, 0xF4ACFB13, 0xFFFFFFFF, true, true, 0xFFFFFFFF>; // attested
/// CRC-32/BASE91-D.
pub type Crc32Base91D = Crc<32, 0xA833982B, 0xFFFFFFFF, true, true, 0xFFFFFFFF>; // confirmed
/// CRC-32/BZIP2.
pub type Crc32Bzip2 = Crc<32, 0x04C11DB7, 0xFFFFFFFF, false, false, 0xFFFFFFFF>; // attested
/// CRC-32/CD-ROM-EDC.
pub type Crc32CdRomEdc = Crc<32, 0x8001801B, 0x00000000, true, true, 0x00000000>; // academic
/// CRC-32/CKSUM.
pub type Crc32Cksum = Crc<32, 0x04C11DB7, 0x00000000, false, false, 0xFFFFFFFF>; // attested
/// CRC-32/ISCSI, better known as CRC-32C (Castagnoli).
pub type Crc32c = Crc<32, 0x1EDC6F41, 0xFFFFFFFF, true, true, 0xFFFFFFFF>; // attested
/// CRC-32/ISO-HDLC: the Ethernet/gzip/PNG/zip CRC-32.
pub type Crc32IsoHdlc = Crc<32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0xFFFFFFFF>; // attested
/// Alias for [`Crc32IsoHdlc`], the variant almost everyone means by
/// "CRC-32".
pub type Crc32 = Crc32IsoHdlc;
/// CRC-32/JAMCRC.
pub type Crc32Jamcrc = Crc<32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0x00000000>; // confirmed
/// CRC-32/MEF.
pub type Crc32Mef = Crc<32, 0x741B8CD7, 0xFFFFFFFF, true, true, 0x00000000>; // attested
/// CRC-32/MPEG-2.
pub type Crc32Mpeg2 = Crc<32, 0x04C11DB7, 0xFFFFFFFF, false, false, 0x00000000>; // attested
/// CRC-32/XFER.
pub type Crc32Xfer = Crc<32, 0x000000AF, 0x00000000, false, false, 0x00000000>; // confirmed
/// CRC-40/GSM.
pub type Crc40Gsm = Crc<40, 0x0004820009, 0x0000000000, false, false, 0xFFFFFFFFFF>; // academic
/// CRC-64/ECMA-182.
pub type Crc64Ecma182 = Crc<64, 0x42F0E1EBA9EA3693, 0x0000000000000000, false, false, 0x0000000000000000>; // academic
/// CRC-64/GO-ISO.
pub type Crc64GoIso = Crc<64, 0x000000000000001B, 0xFFFFFFFFFFFFFFFF, true, true, 0xFFFFFFFFFFFFFFFF>; // confirmed
/// CRC-64/MS.
pub type Crc64Ms = Crc<64, 0x259C84CBA6426349, 0xFFFFFFFFFFFFFFFF, true, true, 0x0000000000000000>; // attested
/// CRC-64/NVME.
pub type Crc64Nvme = Crc<64, 0xAD93D23594C93659, 0xFFFFFFFFFFFFFFFF, true, true, 0xFFFFFFFFFFFFFFFF>; // attested
/// CRC-64/REDIS.
pub type Crc64Redis = Crc<64, 0xAD93D23594C935A9, 0x0000000000000000, true, true, 0x0000000000000000>; // academic
/// CRC-64/WE.
pub type Crc64We = Crc<64, 0x42F0E1EBA9EA3693, 0xFFFFFFFFFFFFFFFF, false, false, 0xFFFFFFFFFFFFFFFF>; // confirmed
/// CRC-64/XZ.
pub type Crc64Xz = Crc<64, 0x42F0E1EBA9EA3693, 0xFFFFFFFFFFFFFFFF, true, true, 0xFFFFFFFFFFFFFFFF>; // attested
